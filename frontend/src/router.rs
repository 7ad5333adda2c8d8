use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::header::Header, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/")]
    Home,
    #[cfg(feature = "mock")]
    #[at("/newsroom/")]
    Home,

    #[cfg(not(feature = "mock"))]
    #[at("/testimonials")]
    Testimonials,
    #[cfg(feature = "mock")]
    #[at("/newsroom/testimonials")]
    Testimonials,

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/newsroom/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::NewsroomPage /> },
        Route::Testimonials => html! { <pages::TestimonialsPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-gray-50" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
