use newsroom_shared::{LoaderColor, LoaderConfig, LoaderSize};
use yew::prelude::*;

use crate::i18n::current::loading_spinner as t;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(LoaderSize::Medium)]
    pub size: LoaderSize,
    #[prop_or(LoaderColor::Blue)]
    pub color: LoaderColor,
    #[prop_or(false)]
    pub full_screen: bool,
    #[prop_or_else(|| Some(AttrValue::from(t::DEFAULT_MESSAGE)))]
    pub message: Option<AttrValue>,
    #[prop_or(true)]
    pub show_message: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let config = LoaderConfig {
        size: props.size,
        color: props.color,
        full_screen: props.full_screen,
        message: props.message.as_ref().map(|msg| msg.to_string()),
        show_message: props.show_message,
    };
    render_loader(&config)
}

#[derive(Properties, PartialEq)]
pub struct PageLoaderProps {
    #[prop_or_else(|| AttrValue::from(t::PAGE_MESSAGE))]
    pub message: AttrValue,
}

/// Branded loader covering the whole page.
#[function_component(PageLoader)]
pub fn page_loader(props: &PageLoaderProps) -> Html {
    render_loader(&LoaderConfig::page(props.message.as_str()))
}

/// Compact white loader for use inside a button label.
#[function_component(ButtonLoader)]
pub fn button_loader() -> Html {
    render_loader(&LoaderConfig::button())
}

fn render_loader(config: &LoaderConfig) -> Html {
    let spinner_style = format!(
        "--spinner-size:{}px;border-width:{}px;",
        config.size.dimension(),
        config.size.stroke()
    );
    let inline = !config.full_screen && config.caption().is_none();

    let ring = html! {
        <span
            style={spinner_style}
            class={classes!(
                "inline-block",
                "w-[var(--spinner-size)]",
                "h-[var(--spinner-size)]",
                "rounded-full",
                "border-solid",
                "border-gray-200/40",
                config.color.ring_class(),
                "animate-spin"
            )}
            aria-hidden="true"
        />
    };

    let caption = match config.caption() {
        Some(message) => html! {
            <p class={classes!("mt-3", "text-sm", "font-medium", config.color.text_class())}>
                { message.to_string() }
            </p>
        },
        None => html! { <span class="sr-only">{ t::ARIA_LABEL }</span> },
    };

    let spinner = if inline {
        html! {
            <span class="inline-flex items-center" role="status" aria-live="polite" aria-busy="true">
                { ring }
                { caption }
            </span>
        }
    } else {
        html! {
            <div
                class={classes!("flex", "flex-col", "items-center", "justify-center", "p-6")}
                role="status"
                aria-live="polite"
                aria-busy="true"
            >
                { ring }
                { caption }
            </div>
        }
    };

    if config.full_screen {
        html! {
            <div
                class={classes!(
                    "loading-spinner-overlay",
                    "fixed",
                    "inset-0",
                    "z-40",
                    "flex",
                    "items-center",
                    "justify-center",
                    "bg-white/80",
                    "backdrop-blur-sm"
                )}
            >
                { spinner }
            </div>
        }
    } else {
        spinner
    }
}
