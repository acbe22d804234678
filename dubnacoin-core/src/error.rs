use thiserror::Error;

/// Failure talking to the backend.
///
/// HTTP status is not inspected. The backend answers rejections with a JSON
/// body, and anything that decodes is a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("Request encoding failed: {0}")]
    Encode(String),
}

impl ApiError {
    pub(crate) fn decode(err: &serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Why a launch context could not be captured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("Telegram WebApp bridge is unavailable")]
    BridgeUnavailable,
    #[error("launch data is missing from the URL query")]
    MissingInitData,
}
