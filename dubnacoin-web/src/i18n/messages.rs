//! Localized text for the controller's semantic messages.

use crate::i18n::{t, tr};
use dubnacoin_core::{Alert, Notice, Welcome};
use std::collections::BTreeMap;

#[must_use]
pub fn alert_text(alert: &Alert) -> String {
    let mut vars = BTreeMap::new();
    if let Some(detail) = alert.detail() {
        vars.insert("detail", detail);
    }
    tr(alert.message_key(), Some(&vars))
}

#[must_use]
pub fn notice_text(notice: &Notice) -> String {
    match notice {
        Notice::Prerendered { text, .. } => text.clone(),
        other => other.message_key().map(t).unwrap_or_default(),
    }
}

/// Welcome text for every state except the greeting, which wraps the name in markup.
#[must_use]
pub fn welcome_text(welcome: &Welcome) -> String {
    let mut vars = BTreeMap::new();
    match welcome {
        Welcome::Greeting(name) => {
            vars.insert("name", name.as_str());
        }
        Welcome::Rejected(error) => {
            vars.insert("error", error.as_str());
        }
        Welcome::Loading
        | Welcome::Anonymous
        | Welcome::NetworkError
        | Welcome::OpenInTelegram => {}
    }
    tr(welcome.message_key(), Some(&vars))
}
