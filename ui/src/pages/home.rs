use leptos::callback::Callback;
use leptos::prelude::ElementChild;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::component;
use leptos::IntoView;
use leptos::view;

use crate::components::{
    footer::Footer, hero::Hero, navbar::Navbar, signup_modal::SignUpModal,
};

#[component]
pub fn Home() -> impl IntoView {
    let signup_open = RwSignal::new(false);

    let open_signup = Callback::new(move |_| signup_open.set(true));
    let close_signup = Callback::new(move |_| signup_open.set(false));

    view! {
      <main>
        <Navbar on_cta=open_signup />
        <Hero/>
        <Footer/>
      </main>

      <SignUpModal is_open=signup_open on_close=close_signup />
    }
}
