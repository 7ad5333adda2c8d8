use newsroom_shared::{LoaderColor, LoaderSize};
use yew::prelude::*;

use crate::{
    components::{error_banner::ErrorBanner, loading_spinner::LoadingSpinner, testimonial_card::TestimonialCard},
    config::SAMPLE_LATENCY_MS,
    hooks::use_sample_data,
    i18n::current::testimonials_page as t,
    models,
};

#[function_component(TestimonialsPage)]
pub fn testimonials_page() -> Html {
    let data = use_sample_data(models::load_testimonials, SAMPLE_LATENCY_MS);

    if data.loading {
        return html! {
            <div class="py-24">
                <LoadingSpinner size={LoaderSize::Large} color={LoaderColor::Green} />
            </div>
        };
    }

    html! {
        <main class="mx-auto max-w-5xl px-4 py-10">
            <header class="mb-10 text-center">
                <h1 class="text-3xl font-bold text-gray-900">{ t::TITLE }</h1>
                <p class="mt-2 text-gray-600">{ t::SUBTITLE }</p>
            </header>
            if let Some(error) = data.error.clone() {
                <ErrorBanner message={error} />
            }
            if data.items.is_empty() {
                <p class="text-center text-gray-500">{ t::EMPTY }</p>
            } else {
                <div class="grid gap-8 md:grid-cols-2">
                    // The first testimonial gets the emphasis treatment.
                    { for data.items.iter().enumerate().map(|(index, testimonial)| html! {
                        <TestimonialCard
                            key={format!("{}-{}", index, testimonial.name)}
                            testimonial={testimonial.clone()}
                            featured={index == 0}
                        />
                    }) }
                </div>
            }
        </main>
    }
}
