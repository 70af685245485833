use leptos::callback::{Callable, Callback};
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::Get;
use leptos::prelude::OnAttribute;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::{IntoView, component, view};

use super::icons::Icon;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AuthButton {
    pub label: &'static str,
    pub class: &'static str,
}

pub fn auth_button(is_authenticated: bool) -> AuthButton {
    if is_authenticated {
        AuthButton {
            label: "Log out",
            class: "bg-red-500 hover:bg-red-600",
        }
    } else {
        AuthButton {
            label: "Get Started",
            class: "bg-yellow-400 hover:bg-yellow-500",
        }
    }
}

#[component]
pub fn Navbar(
    #[prop(optional)] is_authenticated: bool,
    #[prop(optional)] cart_count: u32,
    #[prop(optional)] on_cta: Option<Callback<()>>,
) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let button = auth_button(is_authenticated);

    view! {
        <nav class="w-full px-6 py-4 bg-white border-b-4 border-black shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] animate-slide-down">
            <div class="max-w-7xl mx-auto flex items-center justify-between">
                <a href="/">
                    <div
                        class=move || format!(
                            "text-2xl font-bold font-display transition-transform {}",
                            if hovered.get() { "scale-105" } else { "" }
                        )
                        on:mouseenter=move |_| hovered.set(true)
                        on:mouseleave=move |_| hovered.set(false)
                    >
                        "BRAND"
                    </div>
                </a>

                <div class="flex items-center gap-6">
                    <div class="relative cursor-pointer transition-transform hover:scale-110" aria-label=Icon::Cart.label()>
                        { Icon::Cart.view(24, "") }
                        <span class="absolute -top-2 -right-2 bg-black text-white w-5 h-5 rounded-full flex items-center justify-center text-xs">
                            { cart_count }
                        </span>
                    </div>

                    <div class="cursor-pointer transition-transform hover:scale-110" aria-label=Icon::UserCircle.label()>
                        { Icon::UserCircle.view(24, "") }
                    </div>

                    <button
                        class=format!(
                            "px-6 py-2 font-bold {} border-2 border-black text-black \
                             shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] transition-all hover:scale-105 \
                             hover:shadow-[2px_2px_0px_0px_rgba(0,0,0,1)]",
                            button.class
                        )
                        on:click=move |_| {
                            if let Some(cb) = on_cta {
                                cb.run(());
                            }
                        }
                    >
                        { button.label }
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_sees_get_started() {
        let b = auth_button(false);
        assert_eq!(b.label, "Get Started");
        assert!(b.class.contains("bg-yellow-400"));
    }

    #[test]
    fn signed_in_sees_log_out() {
        let b = auth_button(true);
        assert_eq!(b.label, "Log out");
        assert!(b.class.contains("bg-red-500"));
    }
}
