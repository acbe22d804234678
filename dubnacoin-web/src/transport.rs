use async_trait::async_trait;
use dubnacoin_core::{ApiError, Transport};
use gloo_net::http::Request;

/// `fetch`-backed transport. Same-origin cookies ride along, which keeps
/// cookie-session backends working.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, ApiError> {
        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        if !response.ok() {
            log::warn!("{url} answered HTTP {}", response.status());
        }
        response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))
    }
}
