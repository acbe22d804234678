use dubnacoin_core::Tone;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlInputElement, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Raw `location.search` of the current page.
#[must_use]
pub fn query_string() -> String {
    window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

/// Leave the page for `url`.
///
/// # Errors
/// Returns an error message if there is no window or the navigation is refused.
pub fn navigate(url: &str) -> Result<(), String> {
    let win = window().ok_or_else(|| "window unavailable".to_string())?;
    win.location()
        .set_href(url)
        .map_err(|err| js_error_message(&err))
}

/// Select the whole value of a text input and return it.
#[must_use]
pub fn select_input_text(id: &str) -> Option<String> {
    let input = document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    input.select();
    let _ = input.set_selection_range(0, 99_999);
    Some(input.value())
}

/// Remove notifications the host page rendered before the app mounted.
///
/// Matches `.toast[data-notice]`; `data-tone` picks the tone.
#[must_use]
pub fn take_prerendered_notices() -> Vec<(String, Tone)> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all(".toast[data-notice]") else {
        return Vec::new();
    };
    let mut notices = Vec::new();
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let text = element.text_content().unwrap_or_default().trim().to_string();
        let tone = tone_from_attr(element.get_attribute("data-tone").as_deref());
        element.remove();
        if !text.is_empty() {
            notices.push((text, tone));
        }
    }
    notices
}

#[must_use]
pub fn tone_from_attr(value: Option<&str>) -> Tone {
    match value.map(str::trim) {
        Some("success") => Tone::Success,
        Some("danger" | "error") => Tone::Danger,
        _ => Tone::Info,
    }
}
