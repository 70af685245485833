use leptos::callback::{Callable, Callback};
use leptos::control_flow::Show;
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::Get;
use leptos::prelude::GetUntracked;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::OnAttribute;
use leptos::prelude::PropAttribute;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::prelude::Signal;
use leptos::prelude::Update;
use leptos::prelude::With;
use leptos::prelude::event_target_value;
use leptos::prelude::expect_context;
use leptos::{IntoView, component, view};
use wasm_bindgen_futures::spawn_local;

use super::icons::Icon;
use super::toast::{ToastKind, Toaster};
use crate::signup::{Field, HttpSignUpApi, SignUpDraft, submit};

/// Overlay with the sign-up form. Renders nothing while `is_open` is false.
#[component]
pub fn SignUpModal(#[prop(into)] is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                // mounted fresh on every open, so the draft starts empty
                <SignUpCard on_close />
            </div>
        </Show>
    }
}

#[component]
fn DraftInput(
    draft: RwSignal<SignUpDraft>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-bold mb-2">{ label }</label>
            <input
                type=kind
                name=field.input_name()
                placeholder=placeholder
                required=true
                class="w-full px-3 py-2 border-2 border-black rounded"
                prop:value=move || draft.with(|d| d.get(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.set(field, value));
                }
            />
        </div>
    }
}

#[component]
fn SignUpCard(on_close: Callback<()>) -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let draft = RwSignal::new(SignUpDraft::default());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let draft = draft.get_untracked();
        spawn_local(async move {
            let api = HttpSignUpApi::default();
            // the card may be gone by the time the request settles
            let set_loading = move |v: bool| {
                let _ = loading.try_set(v);
            };
            // the toast already told the user; this is for the console
            if let Err(err) = submit(&draft, &api, &toaster, set_loading, move || on_close.run(())).await {
                log!("sign up not completed: {err}");
            }
        });
    };

    view! {
        <div class="bg-white p-8 rounded-lg border-4 border-black shadow-[8px_8px_0px_0px_rgba(0,0,0,1)] relative max-w-md w-full mx-4 animate-pop-in">
            <button
                class="absolute right-4 top-4 hover:scale-110 transition-transform"
                aria-label="Close"
                on:click=move |_| on_close.run(())
            >
                { Icon::Close.view(24, "") }
            </button>

            <h2 class="text-2xl font-bold mb-6">"Create your account"</h2>

            <button
                type="button"
                class="w-full mb-4 flex items-center justify-center gap-2 py-2 border-2 border-black bg-red-500 text-white hover:brightness-110"
                on:click=move |_| {
                    toaster.push(ToastKind::Info, "Google sign up coming soon!");
                }
            >
                { Icon::Google.view(20, "text-white") }
                <p>"Continue with Google"</p>
            </button>

            <div class="relative my-6">
                <hr class="border-gray-300"/>
                <span class="absolute left-1/2 -translate-x-1/2 -translate-y-1/2 bg-white px-2 text-gray-500 text-sm">
                    "or"
                </span>
            </div>

            <form class="space-y-4" on:submit=on_submit>
                <DraftInput draft field=Field::Name label="Name" placeholder="Enter your name" />
                <DraftInput draft field=Field::Email label="Email" placeholder="Enter your email" kind="email" />
                <DraftInput draft field=Field::Password label="Password" placeholder="Create a password" kind="password" />
                <DraftInput
                    draft
                    field=Field::ConfirmPassword
                    label="Confirm Password"
                    placeholder="Confirm your password"
                    kind="password"
                />

                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="w-full px-6 py-2 bg-yellow-400 text-black font-bold border-2 border-black \
                           shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] transition-all hover:scale-[1.02] \
                           hover:shadow-[2px_2px_0px_0px_rgba(0,0,0,1)] disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    { move || if loading.get() { "Creating Account..." } else { "Sign Up" } }
                </button>
            </form>
        </div>
    }
}
