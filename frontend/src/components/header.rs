use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    i18n::current::{common as common_text, header as t},
    router::Route,
};

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();

    let nav_link = |target: Route, label: &'static str| {
        let active = route.as_ref() == Some(&target);
        let classes = classes!(
            "rounded-md",
            "px-3",
            "py-2",
            "text-sm",
            "font-medium",
            "transition-colors",
            if active { "bg-blue-50 text-blue-700" } else { "text-gray-600 hover:text-gray-900" }
        );
        html! {
            <Link<Route> to={target} classes={classes}>
                { label }
            </Link<Route>>
        }
    };

    html! {
        <header class="sticky top-0 z-30 border-b border-gray-200 bg-white/90 backdrop-blur">
            <div class="mx-auto flex max-w-5xl items-center justify-between px-4 py-3">
                <Link<Route> to={Route::Home} classes={classes!("text-lg", "font-bold", "text-gray-900")}>
                    { common_text::BRAND_NAME }
                </Link<Route>>
                <nav class="flex gap-1" aria-label={t::NAV_MAIN_ARIA}>
                    { nav_link(Route::Home, t::NAV_NEWS) }
                    { nav_link(Route::Testimonials, t::NAV_TESTIMONIALS) }
                </nav>
            </div>
        </header>
    }
}
