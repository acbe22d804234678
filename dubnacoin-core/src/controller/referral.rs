use super::Interactions;
use crate::config::ClientConfig;
use crate::platform::Platform;
use crate::view::{Alert, Notice, View};

/// Deep link that opens the Mini App with `user_id` as start parameter.
#[must_use]
pub fn referral_link(config: &ClientConfig, user_id: i64) -> Option<String> {
    config
        .bot_handle()
        .map(|bot| format!("https://t.me/{bot}?startapp={user_id}"))
}

impl<T, V, P> Interactions<T, V, P>
where
    V: View,
    P: Platform,
{
    #[must_use]
    pub fn referral_link(&self) -> Option<String> {
        self.user_id
            .and_then(|id| referral_link(self.services.api.config(), id))
    }

    /// Copy the referral input's text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns the failure detail after showing it in a blocking dialog.
    pub async fn copy_referral_link(&self) -> Result<(), String> {
        let view = &self.services.view;
        let result = match view.select_referral_link() {
            Some(link) => self.services.platform.copy_text(&link).await,
            None => Err("referral link is not available".to_string()),
        };
        match &result {
            Ok(()) => view.show_notice(Notice::LinkCopied),
            Err(detail) => {
                log::warn!("referral copy failed: {detail}");
                view.show_alert(Alert::CopyFailed(detail.clone()));
            }
        }
        result
    }
}
