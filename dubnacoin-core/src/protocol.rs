//! JSON bodies exchanged with the backend.
//!
//! Responses are decoded leniently: every field is optional on the wire and
//! the `into_*` conversions decide what a given combination means.

use crate::config::DEFAULT_SKIN;
use crate::error::ApiError;
use crate::launch::LaunchContext;
use crate::session::{ProfileSnapshot, Session};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitRequest<'a> {
    #[serde(rename = "initData")]
    pub init_data: &'a str,
    pub referrer_id: Option<&'a str>,
}

impl<'a> From<&'a LaunchContext> for InitRequest<'a> {
    fn from(ctx: &'a LaunchContext) -> Self {
        Self {
            init_data: &ctx.init_data,
            referrer_id: ctx.referrer_id.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct InitResponse {
    pub success: bool,
    pub token: Option<String>,
    pub username: Option<String>,
    pub level: Option<u32>,
    pub coins: Option<u64>,
    pub current_skin: Option<String>,
    pub error: Option<String>,
}

/// What a bootstrap response means for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Accepted {
        session: Session,
        profile: ProfileSnapshot,
    },
    Rejected(String),
}

impl InitResponse {
    /// Interpret the response. `fallback_name` greets users the backend
    /// returned without a username.
    #[must_use]
    pub fn into_outcome(self, fallback_name: &str) -> InitOutcome {
        if !self.success {
            return InitOutcome::Rejected(self.error.unwrap_or_default());
        }
        let username = self
            .username
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| fallback_name.to_string());
        let profile = ProfileSnapshot::new(
            username,
            self.level.unwrap_or(1),
            self.coins.unwrap_or(0),
            self.current_skin.as_deref().unwrap_or(DEFAULT_SKIN),
        );
        InitOutcome::Accepted {
            session: Session::new(self.token),
            profile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickRequest<'a> {
    pub token: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ClickResponse {
    pub coins: Option<u64>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Balance(u64),
    Refused(String),
}

impl ClickResponse {
    /// A balance wins over an error when both are present.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when neither field is present.
    pub fn into_outcome(self) -> Result<ClickOutcome, ApiError> {
        match (self.coins, self.error) {
            (Some(coins), _) => Ok(ClickOutcome::Balance(coins)),
            (None, Some(error)) => Ok(ClickOutcome::Refused(error)),
            (None, None) => Err(ApiError::Decode(
                "click response has neither coins nor error".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRequest<'a> {
    pub error_message: &'a str,
    pub token: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ReportResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn init_request_uses_wire_field_names() {
        let ctx = LaunchContext::new("auth_date=1&hash=x", Some("42".into()));
        let body = serde_json::to_value(InitRequest::from(&ctx)).unwrap();
        assert_eq!(body, json!({ "initData": "auth_date=1&hash=x", "referrer_id": "42" }));

        let ctx = LaunchContext::new("auth_date=1", None);
        let body = serde_json::to_value(InitRequest::from(&ctx)).unwrap();
        assert_eq!(body["referrer_id"], serde_json::Value::Null);
    }

    #[test]
    fn accepted_response_fills_every_profile_field() {
        let resp: InitResponse = serde_json::from_value(json!({
            "success": true,
            "token": "t-1",
            "username": "Ann",
            "level": 3,
            "coins": 42,
            "current_skin": "gold.png"
        }))
        .unwrap();
        let InitOutcome::Accepted { session, profile } = resp.into_outcome("ignored") else {
            panic!("expected acceptance");
        };
        assert_eq!(session.token(), Some("t-1"));
        assert_eq!(profile.username, "Ann");
        assert_eq!(profile.level, 3);
        assert_eq!(profile.coins, 42);
        assert_eq!(profile.skin, "gold.png");
    }

    #[test]
    fn sparse_acceptance_uses_defaults() {
        let resp: InitResponse = serde_json::from_value(json!({ "success": true })).unwrap();
        let InitOutcome::Accepted { session, profile } = resp.into_outcome("Ann K") else {
            panic!("expected acceptance");
        };
        assert_eq!(session.token(), None);
        assert_eq!(profile.username, "Ann K");
        assert_eq!(profile.level, 1);
        assert_eq!(profile.coins, 0);
        assert_eq!(profile.skin, DEFAULT_SKIN);
    }

    #[test]
    fn rejection_keeps_server_text() {
        let resp: InitResponse =
            serde_json::from_value(json!({ "success": false, "error": "expired" })).unwrap();
        assert_eq!(
            resp.into_outcome(""),
            InitOutcome::Rejected("expired".to_string())
        );
    }

    #[test]
    fn click_response_variants() {
        let balance: ClickResponse = serde_json::from_value(json!({ "coins": 50 })).unwrap();
        assert_eq!(balance.into_outcome(), Ok(ClickOutcome::Balance(50)));

        let refused: ClickResponse =
            serde_json::from_value(json!({ "error": "rate limited" })).unwrap();
        assert_eq!(
            refused.into_outcome(),
            Ok(ClickOutcome::Refused("rate limited".to_string()))
        );

        let empty: ClickResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(empty.into_outcome(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn report_request_always_carries_token_field() {
        let body = serde_json::to_value(ReportRequest {
            error_message: "button stuck",
            token: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "error_message": "button stuck", "token": null }));
    }
}
