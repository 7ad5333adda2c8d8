use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found_page as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="mx-auto max-w-xl px-4 py-20 text-center">
            <h2 class="text-2xl font-bold text-gray-900">{ t::TITLE }</h2>
            <p class="mt-3 text-gray-600">{ t::BODY }</p>
            <Link<Route> to={Route::Home} classes={classes!("mt-6", "inline-block", "text-blue-700", "hover:underline")}>
                { t::BACK_HOME }
            </Link<Route>>
        </main>
    }
}
