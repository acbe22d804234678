//! Access to `window.Telegram.WebApp`, the host bridge Telegram injects.

use crate::dom;
use dubnacoin_core::{ClientConfig, LaunchContext, LaunchError, LaunchUser};
use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// The bridge object, when the page runs inside Telegram.
fn web_app() -> Option<JsValue> {
    let win: JsValue = dom::window()?.into();
    let telegram = property(&win, "Telegram")?;
    property(&telegram, "WebApp")
}

fn context_from_bridge(app: &JsValue) -> Option<LaunchContext> {
    let init_data = property(app, "initData")
        .and_then(|value| value.as_string())
        .filter(|data| !data.is_empty())?;
    let unsafe_data = property(app, "initDataUnsafe");
    let start_param = unsafe_data
        .as_ref()
        .and_then(|data| property(data, "start_param"))
        .and_then(|value| value.as_string());
    let user = unsafe_data
        .as_ref()
        .and_then(|data| property(data, "user"))
        .and_then(|value| serde_wasm_bindgen::from_value::<LaunchUser>(value).ok());
    Some(LaunchContext::new(init_data, start_param).with_user(user))
}

/// Capture the launch context for this page load.
///
/// A bridge without init data means the page was opened outside Telegram and
/// counts as unavailable.
///
/// # Errors
/// [`LaunchError::BridgeUnavailable`] without a usable bridge, or the query
/// fallback's error when that fallback is enabled.
pub fn read_launch_context(config: &ClientConfig) -> Result<LaunchContext, LaunchError> {
    if let Some(context) = web_app().as_ref().and_then(context_from_bridge) {
        return Ok(context);
    }
    if config.query_fallback {
        log::info!("Telegram bridge unavailable, reading launch data from the URL");
        return LaunchContext::from_query(&dom::query_string());
    }
    Err(LaunchError::BridgeUnavailable)
}

fn call_method(app: &JsValue, name: &str) {
    let Some(method) = property(app, name).and_then(|value| value.dyn_into::<Function>().ok())
    else {
        return;
    };
    if let Err(err) = method.call0(app) {
        log::warn!("WebApp.{name}() failed: {}", dom::js_error_message(&err));
    }
}

/// Tell Telegram the app has loaded and ask for the full-height viewport.
pub fn notify_ready() {
    if let Some(app) = web_app() {
        call_method(&app, "ready");
        call_method(&app, "expand");
    }
}
