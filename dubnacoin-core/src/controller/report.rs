use super::Interactions;
use crate::api::Transport;
use crate::view::{Notice, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStatus {
    Sent,
    /// Backend answered `success: false`.
    Rejected,
    Failed(String),
}

impl<T, V, P> Interactions<T, V, P>
where
    T: Transport,
    V: View,
{
    /// Submit the report form. The dialog and its contents survive a failure.
    pub async fn submit_report(&self, message: &str) -> ReportStatus {
        let view = &self.services.view;
        match self.services.api.report_error(&self.session, message).await {
            Ok(response) if response.success => {
                log::info!("error report filed");
                view.close_report_dialog();
                view.reset_report_form();
                view.show_notice(Notice::ReportSent);
                ReportStatus::Sent
            }
            Ok(_) => {
                log::warn!("error report rejected by backend");
                view.show_notice(Notice::ReportRejected);
                ReportStatus::Rejected
            }
            Err(err) => {
                log::error!("error report failed: {err}");
                view.show_notice(Notice::ReportFailed);
                ReportStatus::Failed(err.to_string())
            }
        }
    }
}
