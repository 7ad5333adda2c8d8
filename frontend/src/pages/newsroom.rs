use yew::prelude::*;

use crate::{
    components::{
        content_card::ContentCard,
        error_banner::ErrorBanner,
        loading_spinner::{ButtonLoader, PageLoader},
    },
    config::SAMPLE_LATENCY_MS,
    hooks::use_sample_data,
    i18n::current::newsroom_page as t,
    models,
};

#[function_component(NewsroomPage)]
pub fn newsroom_page() -> Html {
    let data = use_sample_data(models::load_content_items, SAMPLE_LATENCY_MS);

    if data.loading {
        return html! { <PageLoader /> };
    }

    html! {
        <main class="mx-auto max-w-3xl px-4 py-10">
            <header class="mb-8 flex items-start justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">{ t::TITLE }</h1>
                    <p class="mt-2 text-gray-600">{ t::SUBTITLE }</p>
                </div>
                <button
                    type="button"
                    class={classes!(
                        "inline-flex",
                        "min-w-[6rem]",
                        "items-center",
                        "justify-center",
                        "rounded-lg",
                        "bg-blue-600",
                        "px-4",
                        "py-2",
                        "text-sm",
                        "font-medium",
                        "text-white",
                        "hover:bg-blue-700",
                        "disabled:opacity-70"
                    )}
                    disabled={data.refreshing}
                    aria-busy={data.refreshing.to_string()}
                    onclick={data.reload.clone()}
                >
                    if data.refreshing {
                        <ButtonLoader />
                    } else {
                        { t::REFRESH }
                    }
                </button>
            </header>
            if let Some(error) = data.error.clone() {
                <ErrorBanner message={error} />
            }
            if data.items.is_empty() {
                <p class="text-center text-gray-500">{ t::EMPTY }</p>
            } else {
                <div class="space-y-6">
                    { for data.items.iter().map(|item| html! {
                        <ContentCard key={item.id.clone()} item={item.clone()} />
                    }) }
                </div>
            }
        </main>
    }
}
