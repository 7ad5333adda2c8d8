use yew::{prelude::*, use_effect_with};
use yew_hooks::prelude::use_timeout;

use crate::{
    components::icons::{Icon, IconName},
    i18n::current::error_banner as t,
};

const AUTO_DISMISS_MS: u32 = 5000;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

/// Dismissible alert for load failures. Renders nothing for a blank message.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { AUTO_DISMISS_MS } else { 0 })
    };

    {
        let is_open = is_open.clone();
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (props.message.clone(), props.auto_dismiss),
            move |(_message, auto_dismiss)| {
                is_open.set(true);
                if *auto_dismiss {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let on_close_click = Callback::from(move |_: MouseEvent| dismiss.emit(()));

    html! {
        <div
            class={classes!(
                "error-banner",
                "mb-6",
                "flex",
                "items-start",
                "gap-3",
                "rounded-xl",
                "border",
                "border-red-200",
                "bg-red-50",
                "px-5",
                "py-4",
                "text-sm",
                "text-red-800"
            )}
            role="alert"
            aria-live="assertive"
        >
            <Icon name={IconName::AlertTriangle} size={20} />
            <div class="flex-1 space-y-1">
                <p class="font-semibold">{ t::TITLE }</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class="rounded-full p-1 transition hover:bg-red-100"
                aria-label={t::CLOSE_ARIA}
                onclick={on_close_click}
            >
                <Icon name={IconName::X} size={16} />
            </button>
        </div>
    }
}
