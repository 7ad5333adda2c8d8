//! Newsroom web front-end: press release cards, testimonial cards and
//! loading indicators, rendered with Yew.

mod components;
mod config;
/// Custom Yew hooks used by the page components.
pub mod hooks;
mod i18n;
mod models;
mod pages;
mod router;
mod share;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
