use leptos::prelude::provide_context;
use leptos::*;
use crate::components::toast::{ToastViewport, Toaster};
use crate::routes::RoutesMenu;
use leptos_router::components::Router;

use leptos_meta::provide_meta_context;
use leptos_meta::Title;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Toaster::new());

    view! {
      <Title text="BRAND – Shop the Future"/>
      <Router>
        <RoutesMenu/>
      </Router>
      <ToastViewport/>
    }
}
