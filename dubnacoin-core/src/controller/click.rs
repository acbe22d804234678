use super::Interactions;
use crate::api::Transport;
use crate::error::ApiError;
use crate::platform::Platform;
use crate::protocol::ClickOutcome;
use crate::view::{Alert, View};

impl<T, V, P> Interactions<T, V, P>
where
    T: Transport,
    V: View,
    P: Platform,
{
    /// Send one click and reflect the answer.
    ///
    /// Every activation dispatches immediately; nothing is debounced, and a
    /// pulse that overlaps an earlier one is ended by the earlier timer.
    ///
    /// # Errors
    ///
    /// Returns the transport or decoding failure after it has been shown.
    pub async fn click(&self) -> Result<ClickOutcome, ApiError> {
        let services = &self.services;
        let outcome = services
            .api
            .click(&self.session)
            .await
            .and_then(crate::protocol::ClickResponse::into_outcome);

        match &outcome {
            Ok(ClickOutcome::Balance(coins)) => {
                services.view.set_balance(*coins);
                services.view.set_pulse(true);
                services
                    .platform
                    .sleep_ms(services.api.config().pulse_ms)
                    .await;
                services.view.set_pulse(false);
            }
            Ok(ClickOutcome::Refused(reason)) => {
                log::warn!("click refused: {reason}");
                services.view.show_alert(Alert::ClickRefused(reason.clone()));
            }
            Err(err) => {
                log::error!("click failed: {err}");
                services.view.show_alert(Alert::ClickFailed);
            }
        }
        outcome
    }
}
