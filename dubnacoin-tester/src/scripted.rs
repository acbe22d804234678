//! In-process stand-in for the DubnaCoin backend.
//!
//! Answers the three JSON endpoints the way the production server does: the
//! session is bound by `/process_init_data`, clicks pay `2^(level-1)` coins,
//! and unauthenticated calls get the server's error bodies.

use crate::signing::{SigningScheme, verify_init_data};
use async_trait::async_trait;
use dubnacoin_core::config::endpoints;
use dubnacoin_core::{ApiError, DEFAULT_SKIN, Transport, user_from_init_data};
use serde_json::{Value, json};
use std::cell::RefCell;

#[derive(Debug, Clone)]
pub struct ScriptedAccount {
    pub level: u32,
    pub coins: u64,
    pub skin: String,
}

impl Default for ScriptedAccount {
    fn default() -> Self {
        Self {
            level: 1,
            coins: 0,
            skin: DEFAULT_SKIN.to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct BackendState {
    user_id: Option<i64>,
    account: ScriptedAccount,
    referrals: Vec<(String, i64)>,
    reports: Vec<String>,
}

pub struct ScriptedBackend {
    bot_token: String,
    scheme: SigningScheme,
    state: RefCell<BackendState>,
}

impl ScriptedBackend {
    #[must_use]
    pub fn new(bot_token: impl Into<String>, scheme: SigningScheme, account: ScriptedAccount) -> Self {
        Self {
            bot_token: bot_token.into(),
            scheme,
            state: RefCell::new(BackendState {
                account,
                ..BackendState::default()
            }),
        }
    }

    /// Reports filed so far.
    #[cfg(test)]
    #[must_use]
    pub fn reports(&self) -> Vec<String> {
        self.state.borrow().reports.clone()
    }

    /// `(referrer, invited user)` pairs credited so far.
    #[cfg(test)]
    #[must_use]
    pub fn referrals(&self) -> Vec<(String, i64)> {
        self.state.borrow().referrals.clone()
    }

    fn process_init_data(&self, body: &Value) -> Value {
        let init_data = body.get("initData").and_then(Value::as_str).unwrap_or_default();
        if init_data.is_empty() {
            return json!({"success": false, "error": "Invalid init data"});
        }
        if let Err(err) = verify_init_data(self.scheme, &self.bot_token, init_data) {
            log::warn!("scripted backend rejected launch data: {err}");
            return json!({"success": false, "error": "Invalid init data"});
        }
        let Some(user) = user_from_init_data(init_data) else {
            return json!({"success": false, "error": "Server error"});
        };

        let mut state = self.state.borrow_mut();
        state.user_id = Some(user.id);
        let referrer = body.get("referrer_id").and_then(Value::as_str);
        if let Some(referrer) = referrer.filter(|r| *r != user.id.to_string()) {
            let pair = (referrer.to_string(), user.id);
            if !state.referrals.contains(&pair) {
                state.referrals.push(pair);
            }
        }
        let account = &state.account;
        json!({
            "success": true,
            "coins": account.coins,
            "level": account.level,
            "current_skin": account.skin,
        })
    }

    fn click(&self) -> Value {
        let mut state = self.state.borrow_mut();
        if state.user_id.is_none() {
            return json!({"error": "User not authenticated"});
        }
        let account = &mut state.account;
        let reward = 1_u64 << account.level.saturating_sub(1).min(63);
        account.coins = account.coins.saturating_add(reward);
        json!({"coins": account.coins})
    }

    fn report_error(&self, body: &Value) -> Value {
        let mut state = self.state.borrow_mut();
        let message = body
            .get("error_message")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if state.user_id.is_none() || message.is_empty() {
            return json!({"success": false});
        }
        state.reports.push(message.to_string());
        json!({"success": true})
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedBackend {
    async fn post_json(&self, url: &str, body: String) -> Result<String, ApiError> {
        let request: Value =
            serde_json::from_str(&body).map_err(|err| ApiError::Transport(err.to_string()))?;
        let path = url.split('?').next().unwrap_or(url);
        let response = if path.ends_with(endpoints::PROCESS_INIT_DATA) {
            self.process_init_data(&request)
        } else if path.ends_with(endpoints::CLICK) {
            self.click()
        } else if path.ends_with(endpoints::REPORT_ERROR) {
            self.report_error(&request)
        } else {
            return Err(ApiError::Transport(format!("no scripted route for {url}")));
        };
        log::debug!("scripted {path} -> {response}");
        Ok(response.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::sign_init_data;
    use dubnacoin_core::LaunchUser;

    fn signed(token: &str) -> String {
        let user = LaunchUser {
            id: 5,
            first_name: Some("Ann".into()),
            ..LaunchUser::default()
        };
        sign_init_data(SigningScheme::Legacy, token, &user, 1).unwrap()
    }

    #[test]
    fn click_requires_a_bound_session() {
        let backend = ScriptedBackend::new("t", SigningScheme::Legacy, ScriptedAccount::default());
        let reply = tokio_test::block_on(backend.post_json("/click", "{}".into())).unwrap();
        assert!(reply.contains("User not authenticated"));
    }

    #[test]
    fn clicks_pay_by_level_after_bootstrap() {
        let account = ScriptedAccount {
            level: 3,
            coins: 10,
            skin: "gold.png".into(),
        };
        let backend = ScriptedBackend::new("t", SigningScheme::Legacy, account);
        let body = json!({"initData": signed("t"), "referrer_id": "9"}).to_string();
        let reply = tokio_test::block_on(backend.post_json("/process_init_data", body)).unwrap();
        assert!(reply.contains("\"success\":true"));
        assert_eq!(backend.referrals(), vec![("9".to_string(), 5)]);

        let reply = tokio_test::block_on(backend.post_json("/click", "{}".into())).unwrap();
        assert_eq!(reply, r#"{"coins":14}"#);

        let body = json!({"error_message": "", "token": null}).to_string();
        let reply = tokio_test::block_on(backend.post_json("/report_error", body)).unwrap();
        assert_eq!(reply, r#"{"success":false}"#);
        let body = json!({"error_message": "froze", "token": null}).to_string();
        tokio_test::block_on(backend.post_json("/report_error", body)).unwrap();
        assert_eq!(backend.reports(), vec!["froze".to_string()]);
    }

    #[test]
    fn wrong_token_is_rejected_like_the_server() {
        let backend = ScriptedBackend::new("t", SigningScheme::Legacy, ScriptedAccount::default());
        let body = json!({"initData": signed("other"), "referrer_id": null}).to_string();
        let reply = tokio_test::block_on(backend.post_json("/process_init_data", body)).unwrap();
        assert!(reply.contains("Invalid init data"));
    }
}
