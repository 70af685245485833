use gloo_timers::callback::Timeout;
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::Get;
use leptos::prelude::GetUntracked;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::OnAttribute;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::prelude::Update;
use leptos::prelude::expect_context;
use leptos::{IntoView, component, view};

use crate::signup::Notifier;

/// Toasts beyond this are dropped oldest first.
pub const MAX_VISIBLE: usize = 3;
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-400",
            ToastKind::Error => "bg-red-500 text-white",
            ToastKind::Info => "bg-white",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notifications, shared through context.
#[derive(Copy, Clone)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                message: message.into(),
            });
            if list.len() > MAX_VISIBLE {
                let excess = list.len() - MAX_VISIBLE;
                list.drain(..excess);
            }
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    /// Tracked read of the visible toasts.
    pub fn visible(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, kind: ToastKind, message: String) {
        self.push(kind, message);
    }
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <div
            class="fixed bottom-4 right-4 z-[60] flex flex-col gap-2 w-80"
            aria-live="polite"
        >
            <For
                each=move || toaster.visible()
                key=|t: &Toast| t.id
                children=move |t: Toast| {
                    let Toast { id, kind, message } = t;
                    Timeout::new(TOAST_TTL_MS, move || toaster.dismiss(id)).forget();

                    view! {
                        <div
                            role="status"
                            class=format!(
                                "px-4 py-3 font-bold border-2 border-black cursor-pointer \
                                 shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] animate-pop-in {}",
                                kind.class()
                            )
                            on:click=move |_| toaster.dismiss(id)
                        >
                            { message }
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(toaster: &Toaster) -> Vec<String> {
        toaster
            .toasts
            .get_untracked()
            .into_iter()
            .map(|t| t.message)
            .collect()
    }

    #[test]
    fn ids_increase() {
        let toaster = Toaster::new();
        let a = toaster.push(ToastKind::Info, "a");
        let b = toaster.push(ToastKind::Error, "b");
        assert!(b > a);
    }

    #[test]
    fn oldest_dropped_past_cap() {
        let toaster = Toaster::new();
        for m in ["one", "two", "three", "four"] {
            toaster.push(ToastKind::Info, m);
        }
        assert_eq!(messages(&toaster), vec!["two", "three", "four"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let toaster = Toaster::new();
        let first = toaster.push(ToastKind::Success, "saved");
        toaster.push(ToastKind::Error, "failed");

        toaster.dismiss(first);
        assert_eq!(messages(&toaster), vec!["failed"]);

        // already gone
        toaster.dismiss(first);
        assert_eq!(messages(&toaster), vec!["failed"]);
    }

    #[test]
    fn notifier_pushes() {
        let toaster = Toaster::new();
        toaster.notify(ToastKind::Error, "Passwords don't match!".into());

        let list = toaster.toasts.get_untracked();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].kind, ToastKind::Error);
    }
}
