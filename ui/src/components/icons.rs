use leptos::prelude::*;

/// Inline stroke icons (lucide paths, 24x24 box).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Icon {
    Cart,
    UserCircle,
    Close,
    Google,
    Facebook,
    Twitter,
    Instagram,
    Github,
}

impl Icon {
    pub fn label(&self) -> &'static str {
        match self {
            Icon::Cart => "Cart",
            Icon::UserCircle => "Account",
            Icon::Close => "Close",
            Icon::Google => "Google",
            Icon::Facebook => "Facebook",
            Icon::Twitter => "Twitter",
            Icon::Instagram => "Instagram",
            Icon::Github => "GitHub",
        }
    }

    fn paths(&self) -> AnyView {
        match self {
            Icon::Cart => view! {
                <circle cx="8" cy="21" r="1"/>
                <circle cx="19" cy="21" r="1"/>
                <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"/>
            }
            .into_any(),
            Icon::UserCircle => view! {
                <circle cx="12" cy="12" r="10"/>
                <circle cx="12" cy="10" r="3"/>
                <path d="M7 20.662V19a2 2 0 0 1 2-2h6a2 2 0 0 1 2 2v1.662"/>
            }
            .into_any(),
            Icon::Close => view! {
                <path d="M18 6 6 18"/>
                <path d="m6 6 12 12"/>
            }
            .into_any(),
            Icon::Google => view! {
                <path d="M21.8 10.2H12v3.9h5.6c-.5 2.5-2.7 4.2-5.6 4.2a6.3 6.3 0 1 1 4.1-11.1l2.9-2.9A10.3 10.3 0 1 0 22 12c0-.6-.1-1.2-.2-1.8z"/>
            }
            .into_any(),
            Icon::Facebook => view! {
                <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>
            }
            .into_any(),
            Icon::Twitter => view! {
                <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>
            }
            .into_any(),
            Icon::Instagram => view! {
                <rect width="20" height="20" x="2" y="2" rx="5" ry="5"/>
                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/>
                <line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>
            }
            .into_any(),
            Icon::Github => view! {
                <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>
                <path d="M9 18c-4.51 2-5-2-7-2"/>
            }
            .into_any(),
        }
    }

    pub fn view(self, size: u32, class: &'static str) -> AnyView {
        view! {
            <svg
                width=size.to_string()
                height=size.to_string()
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class=class
                aria-hidden="true"
            >
                { self.paths() }
            </svg>
        }
        .into_any()
    }
}
