use crate::config::DEFAULT_SKIN;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SKIN_FILE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9_.-]+\.(png|jpe?g|gif|webp)$").ok());

/// Session issued by the backend after it verified the launch data.
///
/// Only a successful bootstrap constructs one. Cookie-based backends omit the
/// token; requests then carry `token: null`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub(crate) fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub username: String,
    pub level: u32,
    pub coins: u64,
    /// Skin file name, already checked by [`sanitize_skin`].
    pub skin: String,
}

impl ProfileSnapshot {
    #[must_use]
    pub fn new(username: impl Into<String>, level: u32, coins: u64, skin: &str) -> Self {
        Self {
            username: username.into(),
            level,
            coins,
            skin: sanitize_skin(skin),
        }
    }
}

/// Accept plain image file names only; anything else maps to the default skin.
#[must_use]
pub fn sanitize_skin(skin: &str) -> String {
    let skin = skin.trim();
    let valid = !skin.starts_with('.')
        && SKIN_FILE
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(skin));
    if valid {
        skin.to_string()
    } else {
        DEFAULT_SKIN.to_string()
    }
}

/// Page-level lifecycle. Only [`PageState::Ready`] permits interaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Loading,
    Ready,
    BootstrapFailed(String),
    NetworkError,
    /// Opened outside Telegram.
    Unsupported,
}

impl PageState {
    #[must_use]
    pub const fn permits_interaction(&self) -> bool {
        matches!(self, Self::Ready)
    }
}
