use leptos::IntoView;
use leptos::component;
use leptos::prelude::ElementChild;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::home::Home;

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <p>"404 – not found"</p> }>
        <Route path=path!("") view=Home />
      </Routes>
    }
}
