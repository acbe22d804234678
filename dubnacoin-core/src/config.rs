//! Client configuration shared by every front end.
//!
//! The browser build fills this from compile-time environment, the tester
//! from command-line flags. Paths handed out here respect the configured
//! bases so the app can live under a sub-path.

use serde::{Deserialize, Serialize};

/// Highlight duration applied to the coin button after a successful click.
pub const PULSE_MS: u32 = 300;
/// How long a transient notification stays on screen.
pub const TOAST_MS: u32 = 4_000;
/// Skin served when the backend has none on record.
pub const DEFAULT_SKIN: &str = "default.png";

/// Backend routes consumed by the client.
pub mod endpoints {
    pub const PROCESS_INIT_DATA: &str = "/process_init_data";
    pub const CLICK: &str = "/click";
    pub const REPORT_ERROR: &str = "/report_error";
    pub const SHOP: &str = "/shop";
    pub const FRIENDS: &str = "/friends";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin (and optional prefix) of the backend. Empty means same-origin.
    pub api_base: String,
    /// Prefix for static assets, e.g. `/play` when hosted under a sub-path.
    pub asset_base: String,
    /// Directory under `asset_base` that holds coin skins.
    pub image_dir: String,
    /// Bot account used to build referral links.
    pub bot_username: Option<String>,
    /// Read launch data from the URL query when the bridge is missing.
    pub query_fallback: bool,
    pub pulse_ms: u32,
    pub toast_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            asset_base: String::new(),
            image_dir: "static/images".to_string(),
            bot_username: None,
            query_fallback: false,
            pulse_ms: PULSE_MS,
            toast_ms: TOAST_MS,
        }
    }
}

impl ClientConfig {
    /// Absolute or root-anchored URL for a backend route.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        join(&self.api_base, path)
    }

    /// Image source for a skin identifier.
    #[must_use]
    pub fn skin_url(&self, skin: &str) -> String {
        let dir = self.image_dir.trim_matches('/');
        join(&self.asset_base, &format!("{dir}/{skin}"))
    }

    /// Bot username with any leading `@` removed; `None` when unset or blank.
    #[must_use]
    pub fn bot_handle(&self) -> Option<&str> {
        self.bot_username
            .as_deref()
            .map(|name| name.trim().trim_start_matches('@'))
            .filter(|name| !name.is_empty())
    }
}

fn join(base: &str, relative: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches('/');
    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_root_anchored_without_base() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint(endpoints::CLICK), "/click");
        assert_eq!(config.skin_url("gold.png"), "/static/images/gold.png");
    }

    #[test]
    fn bases_are_joined_without_double_slashes() {
        let config = ClientConfig {
            api_base: "https://dubnacoin.ru/".into(),
            asset_base: "/play/".into(),
            image_dir: "/static/images/".into(),
            ..ClientConfig::default()
        };
        assert_eq!(
            config.endpoint(endpoints::PROCESS_INIT_DATA),
            "https://dubnacoin.ru/process_init_data"
        );
        assert_eq!(config.skin_url("gold.png"), "/play/static/images/gold.png");
    }

    #[test]
    fn bot_handle_strips_at_sign_and_blank_values() {
        let mut config = ClientConfig {
            bot_username: Some("@DubnaCoinBot".into()),
            ..ClientConfig::default()
        };
        assert_eq!(config.bot_handle(), Some("DubnaCoinBot"));
        config.bot_username = Some("  ".into());
        assert_eq!(config.bot_handle(), None);
    }
}
