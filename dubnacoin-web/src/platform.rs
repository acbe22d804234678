use crate::dom;
use async_trait::async_trait;
use dubnacoin_core::Platform;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

#[async_trait(?Send)]
impl Platform for BrowserPlatform {
    async fn sleep_ms(&self, duration_ms: u32) {
        TimeoutFuture::new(duration_ms).await;
    }

    async fn copy_text(&self, text: &str) -> Result<(), String> {
        let win = dom::window().ok_or_else(|| "window unavailable".to_string())?;
        let promise = win.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| dom::js_error_message(&err))
    }

    fn navigate(&self, url: &str) {
        if let Err(err) = dom::navigate(url) {
            log::error!("navigation to {url} failed: {err}");
        }
    }
}
