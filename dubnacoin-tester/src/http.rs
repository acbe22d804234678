use anyhow::{Context, Result};
use async_trait::async_trait;
use dubnacoin_core::{ApiError, Transport};
use std::time::Duration;

/// `reqwest` transport with a cookie jar, so the backend's session cookie
/// from `/process_init_data` rides along on later calls.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, ApiError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("{url} answered HTTP {status}");
        }
        response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))
    }
}
