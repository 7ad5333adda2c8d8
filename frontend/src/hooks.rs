use gloo_timers::future::TimeoutFuture;
use newsroom_shared::{share_item, ContentItem, ShareOutcome, SharePayload};
use yew::prelude::*;

use crate::{
    config::COPIED_FEEDBACK_MS,
    share::{current_location, BrowserShareHost},
};

/// Share button wiring for one content card.
#[derive(Clone, PartialEq)]
pub struct ShareAction {
    /// Click handler that starts sharing the item.
    pub onclick: Callback<MouseEvent>,
    /// The link was just copied to the clipboard.
    pub copied: bool,
}

/// Share `item` through the browser: the native share sheet when there is
/// one, the clipboard otherwise. Fire-and-forget: the button never waits on
/// the outcome, and only a clipboard copy shows a short confirmation.
///
/// # Example
/// ```rust
/// use crate::hooks::use_share;
///
/// #[function_component(ShareButton)]
/// fn share_button(props: &ShareButtonProps) -> Html {
///     let share = use_share(props.item.clone());
///     html! { <button onclick={share.onclick}>{ "Share" }</button> }
/// }
/// ```
#[hook]
pub fn use_share(item: ContentItem) -> ShareAction {
    let copied = use_state(|| false);

    let onclick = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let payload = SharePayload::for_item(&item, &current_location());
            let copied = copied.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let host = BrowserShareHost::new();
                let outcome = share_item(&host, &payload).await;
                match outcome {
                    ShareOutcome::Shared => {},
                    ShareOutcome::Copied => {
                        copied.set(true);
                        TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
                        copied.set(false);
                    },
                    ShareOutcome::Dismissed | ShareOutcome::Failed => {
                        web_sys::console::warn_1(
                            &format!("Share of {} ended with {:?}", payload.url, outcome).into(),
                        );
                    },
                }
            });
        })
    };

    ShareAction {
        onclick,
        copied: *copied,
    }
}

/// Result of [`use_sample_data`].
#[derive(Clone, PartialEq)]
pub struct DataState<T> {
    /// Most recently loaded items.
    pub items: Vec<T>,
    /// First load in flight; nothing to show yet.
    pub loading: bool,
    /// A reload is in flight; `items` still holds the previous result.
    pub refreshing: bool,
    /// Error message from the last load, if any.
    pub error: Option<String>,
    /// Click handler that triggers a reload.
    pub reload: Callback<MouseEvent>,
}

/// Own a data vector plus its loading flags, filled from `load` after a
/// simulated provider delay. Stands in for a fetch lifecycle: `loading` is
/// `true` until the first load settles, `refreshing` while a reload runs.
#[hook]
pub fn use_sample_data<T>(load: fn() -> anyhow::Result<Vec<T>>, delay_ms: u32) -> DataState<T>
where
    T: Clone + PartialEq + 'static,
{
    let items = use_state(Vec::<T>::new);
    let loading = use_state(|| true);
    let refreshing = use_state(|| false);
    let error = use_state(|| None::<String>);
    let generation = use_state(|| 0u32);

    {
        let items = items.clone();
        let loading = loading.clone();
        let refreshing = refreshing.clone();
        let error = error.clone();
        use_effect_with(*generation, move |generation| {
            if *generation == 0 {
                loading.set(true);
            } else {
                refreshing.set(true);
            }
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                match load() {
                    Ok(data) => {
                        items.set(data);
                        error.set(None);
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to load sample data: {:#}", e).into(),
                        );
                        error.set(Some(format!("{:#}", e)));
                    },
                }
                loading.set(false);
                refreshing.set(false);
            });
            || ()
        });
    }

    let reload = {
        let generation = generation.clone();
        let busy = *loading || *refreshing;
        Callback::from(move |_: MouseEvent| {
            if !busy {
                generation.set(*generation + 1);
            }
        })
    };

    DataState {
        items: (*items).clone(),
        loading: *loading,
        refreshing: *refreshing,
        error: (*error).clone(),
        reload,
    }
}
