//! Typed client for the backend endpoints over a pluggable [`Transport`].

use crate::config::{ClientConfig, endpoints};
use crate::error::ApiError;
use crate::launch::LaunchContext;
use crate::protocol::{
    ClickRequest, ClickResponse, InitRequest, InitResponse, ReportRequest, ReportResponse,
};
use crate::session::Session;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Moves one JSON document to a URL and returns the raw response body.
#[async_trait(?Send)]
pub trait Transport {
    /// POST `body` as `application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the request cannot complete or the
    /// body cannot be read.
    async fn post_json(&self, url: &str, body: String) -> Result<String, ApiError>;
}

pub struct Api<T> {
    transport: T,
    config: ClientConfig,
}

impl<T> Api<T> {
    pub const fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> Api<T> {
    async fn post<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_string(request).map_err(|e| ApiError::Encode(e.to_string()))?;
        let url = self.config.endpoint(path);
        log::debug!("POST {url}");
        let text = self.transport.post_json(&url, body).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::decode(&e))
    }

    /// Submit launch data for verification.
    ///
    /// # Errors
    ///
    /// Transport and decoding failures only; a rejection is a decoded response.
    pub async fn process_init_data(&self, launch: &LaunchContext) -> Result<InitResponse, ApiError> {
        self.post(endpoints::PROCESS_INIT_DATA, &InitRequest::from(launch))
            .await
    }

    /// Register one click.
    ///
    /// # Errors
    ///
    /// Transport and decoding failures.
    pub async fn click(&self, session: &Session) -> Result<ClickResponse, ApiError> {
        let request = ClickRequest {
            token: session.token(),
        };
        self.post(endpoints::CLICK, &request).await
    }

    /// File a user error report.
    ///
    /// # Errors
    ///
    /// Transport and decoding failures.
    pub async fn report_error(
        &self,
        session: &Session,
        message: &str,
    ) -> Result<ReportResponse, ApiError> {
        let request = ReportRequest {
            error_message: message,
            token: session.token(),
        };
        self.post(endpoints::REPORT_ERROR, &request).await
    }
}
