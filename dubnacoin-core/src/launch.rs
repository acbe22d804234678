//! Launch context captured from the Telegram host once per page load.

use crate::error::LaunchError;
use serde::{Deserialize, Serialize};

const INIT_DATA_KEYS: &[&str] = &["tgWebAppData", "initData"];
const REFERRER_KEYS: &[&str] = &["tgWebAppStartParam", "start_param", "ref"];

/// Unsigned user record Telegram exposes next to the signed payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LaunchUser {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl LaunchUser {
    /// Name to greet the user with when the backend does not send one.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(username) = self.username.as_deref().filter(|u| !u.is_empty()) {
            return username.to_string();
        }
        let first = self.first_name.as_deref().unwrap_or_default();
        let last = self.last_name.as_deref().unwrap_or_default();
        format!("{first} {last}").trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaunchContext {
    /// Signed query-string payload, forwarded verbatim.
    pub init_data: String,
    pub referrer_id: Option<String>,
    pub user: Option<LaunchUser>,
}

impl LaunchContext {
    #[must_use]
    pub fn new(init_data: impl Into<String>, referrer_id: Option<String>) -> Self {
        let init_data = init_data.into();
        let user = user_from_init_data(&init_data);
        Self {
            init_data,
            referrer_id: referrer_id.filter(|r| !r.is_empty()),
            user,
        }
    }

    #[must_use]
    pub fn with_user(mut self, user: Option<LaunchUser>) -> Self {
        if user.is_some() {
            self.user = user;
        }
        self
    }

    /// Build a context from a page query string such as `?tgWebAppData=...&ref=42`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::MissingInitData`] when no init data key is present.
    pub fn from_query(query: &str) -> Result<Self, LaunchError> {
        let pairs = parse_pairs(query.trim_start_matches(['?', '#']));
        let lookup = |keys: &[&str]| {
            keys.iter().find_map(|key| {
                pairs
                    .iter()
                    .find(|(k, v)| k == key && !v.is_empty())
                    .map(|(_, v)| v.clone())
            })
        };
        let init_data = lookup(INIT_DATA_KEYS).ok_or(LaunchError::MissingInitData)?;
        Ok(Self::new(init_data, lookup(REFERRER_KEYS)))
    }

    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    #[must_use]
    pub fn language_code(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.language_code.as_deref())
    }
}

/// Recover the `user` JSON field from a signed payload without verifying it.
#[must_use]
pub fn user_from_init_data(init_data: &str) -> Option<LaunchUser> {
    parse_pairs(init_data)
        .into_iter()
        .find(|(key, _)| key == "user")
        .and_then(|(_, json)| serde_json::from_str(&json).ok())
}

fn parse_pairs(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if !key.is_empty() => {
                    let value = value.replace('+', " ");
                    let decoded = urlencoding::decode(&value).ok()?;
                    Some((key.to_string(), decoded.into_owned()))
                }
                _ => None,
            }
        })
        .collect()
}
