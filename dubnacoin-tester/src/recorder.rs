//! Headless [`View`] and [`Platform`] that write everything to an event log.

use async_trait::async_trait;
use dubnacoin_core::{Alert, Notice, PageState, Platform, ProfileSnapshot, View, Welcome};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ViewEvent {
    PageState { state: String },
    Welcome { text: String },
    Profile { username: String, level: u32, coins: u64, skin: String },
    Balance { coins: u64 },
    Pulse { active: bool },
    Alert { message: String },
    Notice { message: String },
    ReportDialog { open: bool },
    ReportFormReset,
    NotificationsActivated,
    Copied { text: String },
    Navigated { url: String },
}

pub type EventLog = Rc<RefCell<Vec<ViewEvent>>>;

fn page_state_label(state: &PageState) -> String {
    match state {
        PageState::Loading => "loading".into(),
        PageState::Ready => "ready".into(),
        PageState::BootstrapFailed(reason) => format!("bootstrap_failed: {reason}"),
        PageState::NetworkError => "network_error".into(),
        PageState::Unsupported => "unsupported".into(),
    }
}

fn welcome_label(welcome: &Welcome) -> String {
    match welcome {
        Welcome::Greeting(name) => format!("greeting: {name}"),
        Welcome::Rejected(reason) => format!("rejected: {reason}"),
        other => other.message_key().to_string(),
    }
}

fn alert_label(alert: &Alert) -> String {
    match alert.detail() {
        Some(detail) => format!("{}: {detail}", alert.message_key()),
        None => alert.message_key().to_string(),
    }
}

/// Records view writes. The referral "input" holds whatever the scenario
/// placed there, mirroring the page's read-only field.
pub struct RecordingView {
    log: EventLog,
    referral_input: RefCell<Option<String>>,
}

impl RecordingView {
    #[must_use]
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            referral_input: RefCell::new(None),
        }
    }

    pub fn set_referral_input(&self, link: Option<String>) {
        self.referral_input.replace(link);
    }

    fn push(&self, event: ViewEvent) {
        log::debug!("view: {event:?}");
        self.log.borrow_mut().push(event);
    }
}

impl View for RecordingView {
    fn set_page_state(&self, state: PageState) {
        self.push(ViewEvent::PageState {
            state: page_state_label(&state),
        });
    }

    fn show_welcome(&self, welcome: Welcome) {
        self.push(ViewEvent::Welcome {
            text: welcome_label(&welcome),
        });
    }

    fn show_profile(&self, profile: &ProfileSnapshot) {
        self.push(ViewEvent::Profile {
            username: profile.username.clone(),
            level: profile.level,
            coins: profile.coins,
            skin: profile.skin.clone(),
        });
    }

    fn set_balance(&self, coins: u64) {
        self.push(ViewEvent::Balance { coins });
    }

    fn set_pulse(&self, active: bool) {
        self.push(ViewEvent::Pulse { active });
    }

    fn show_alert(&self, alert: Alert) {
        self.push(ViewEvent::Alert {
            message: alert_label(&alert),
        });
    }

    fn show_notice(&self, notice: Notice) {
        let message = notice
            .message_key()
            .map_or_else(|| format!("{notice:?}"), ToString::to_string);
        self.push(ViewEvent::Notice { message });
    }

    fn open_report_dialog(&self) {
        self.push(ViewEvent::ReportDialog { open: true });
    }

    fn close_report_dialog(&self) {
        self.push(ViewEvent::ReportDialog { open: false });
    }

    fn reset_report_form(&self) {
        self.push(ViewEvent::ReportFormReset);
    }

    fn activate_notifications(&self) {
        self.push(ViewEvent::NotificationsActivated);
    }

    fn select_referral_link(&self) -> Option<String> {
        self.referral_input.borrow().clone()
    }
}

/// Real timers, an in-memory clipboard and recorded navigation.
pub struct HeadlessPlatform {
    log: EventLog,
}

impl HeadlessPlatform {
    #[must_use]
    pub const fn new(log: EventLog) -> Self {
        Self { log }
    }
}

#[async_trait(?Send)]
impl Platform for HeadlessPlatform {
    async fn sleep_ms(&self, duration_ms: u32) {
        tokio::time::sleep(Duration::from_millis(u64::from(duration_ms))).await;
    }

    async fn copy_text(&self, text: &str) -> Result<(), String> {
        self.log.borrow_mut().push(ViewEvent::Copied {
            text: text.to_string(),
        });
        Ok(())
    }

    fn navigate(&self, url: &str) {
        self.log.borrow_mut().push(ViewEvent::Navigated {
            url: url.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_keep_server_text() {
        assert_eq!(
            page_state_label(&PageState::BootstrapFailed("Invalid init data".into())),
            "bootstrap_failed: Invalid init data"
        );
        assert_eq!(welcome_label(&Welcome::NetworkError), "welcome.network_error");
        assert_eq!(
            alert_label(&Alert::ClickRefused("User not authenticated".into())),
            "alert.click_refused: User not authenticated"
        );
    }

    #[test]
    fn referral_input_is_what_the_scenario_placed() {
        let view = RecordingView::new(EventLog::default());
        assert_eq!(view.select_referral_link(), None);
        view.set_referral_input(Some("https://t.me/bot?startapp=1".into()));
        assert_eq!(
            view.select_referral_link().as_deref(),
            Some("https://t.me/bot?startapp=1")
        );
    }
}
