//! Single-page frontend of the ClonePartner guides site.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
mod logging;
mod models;
mod pages;
mod query;
mod router;
mod seo;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <router::AppRouter />
    }
}

fn main() {
    logging::init();
    log::info!("guides frontend starting, api base {}", config::API_BASE);
    yew::Renderer::<App>::new().render();
}
