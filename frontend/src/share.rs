//! Browser implementation of the share host: Web Share API with the
//! Clipboard API as fallback. Both are looked up by reflection because
//! neither is guaranteed to exist (`navigator.share` is missing on most
//! desktop browsers, `navigator.clipboard` outside secure contexts).

use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use newsroom_shared::{ShareError, ShareHost, SharePayload};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Current page URL, or an empty string outside a browser window.
pub fn current_location() -> String {
    web_sys::window()
        .and_then(|win| win.location().href().ok())
        .unwrap_or_default()
}

pub struct BrowserShareHost {
    navigator: Option<JsValue>,
}

impl Default for BrowserShareHost {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserShareHost {
    pub fn new() -> Self {
        Self {
            navigator: web_sys::window().map(|win| JsValue::from(win.navigator())),
        }
    }

    fn navigator_method(&self, name: &str) -> Option<(JsValue, Function)> {
        let navigator = self.navigator.as_ref()?;
        let func = lookup(navigator, name)?.dyn_into::<Function>().ok()?;
        Some((navigator.clone(), func))
    }

    fn clipboard_write_text(&self) -> Option<(JsValue, Function)> {
        let clipboard = lookup(self.navigator.as_ref()?, "clipboard")?;
        let func = lookup(&clipboard, "writeText")?.dyn_into::<Function>().ok()?;
        Some((clipboard, func))
    }
}

#[async_trait(?Send)]
impl ShareHost for BrowserShareHost {
    fn supports_native_share(&self) -> bool {
        self.navigator_method("share").is_some()
    }

    async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        let (navigator, share) = self.navigator_method("share").ok_or(ShareError::Unavailable)?;

        let data = Object::new();
        for (key, value) in
            [("title", &payload.title), ("text", &payload.text), ("url", &payload.url)]
        {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(|err| ShareError::Rejected(describe(&err)))?;
        }

        call_promise(&share, &navigator, &data.into())
            .await
            .map_err(|err| ShareError::Rejected(describe(&err)))
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError> {
        let (clipboard, write_text) = self.clipboard_write_text().ok_or(ShareError::Unavailable)?;
        call_promise(&write_text, &clipboard, &JsValue::from_str(text))
            .await
            .map_err(|err| ShareError::Clipboard(describe(&err)))
    }
}

fn lookup(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

async fn call_promise(func: &Function, this: &JsValue, arg: &JsValue) -> Result<(), JsValue> {
    let promise = func.call1(this, arg)?.dyn_into::<Promise>()?;
    JsFuture::from(promise).await.map(|_| ())
}

/// DOMException name (`AbortError`, `NotAllowedError`, ...) or the value's
/// string form.
fn describe(err: &JsValue) -> String {
    lookup(err, "name")
        .and_then(|name| name.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}
