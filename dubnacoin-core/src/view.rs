//! The view binding every controller writes to.
//!
//! Front ends resolve their widgets once and implement [`View`] over them; the
//! controller never looks anything up on its own. Messages are semantic and
//! carry i18n keys, so each front end renders them in its own language.

use crate::session::{PageState, ProfileSnapshot};

/// Text shown in the welcome area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Welcome {
    #[default]
    Loading,
    Greeting(String),
    /// Greeting for a user with no known name.
    Anonymous,
    /// Backend declined the launch data; text is shown verbatim.
    Rejected(String),
    NetworkError,
    /// Page opened outside Telegram.
    OpenInTelegram,
}

impl Welcome {
    /// Greeting for `name`, or [`Welcome::Anonymous`] when it is blank.
    #[must_use]
    pub fn greeting(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            Self::Anonymous
        } else {
            Self::Greeting(name.to_string())
        }
    }

    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::Loading => "welcome.loading",
            Self::Greeting(_) => "welcome.greeting",
            Self::Anonymous => "welcome.greeting_anonymous",
            Self::Rejected(_) => "welcome.rejected",
            Self::NetworkError => "welcome.network_error",
            Self::OpenInTelegram => "welcome.open_in_telegram",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Danger,
}

/// Transient, auto-dismissing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ReportSent,
    ReportRejected,
    ReportFailed,
    LinkCopied,
    /// Pre-rendered by the host page; text is already localized.
    Prerendered { text: String, tone: Tone },
}

impl Notice {
    #[must_use]
    pub const fn tone(&self) -> Tone {
        match self {
            Self::ReportSent | Self::LinkCopied => Tone::Success,
            Self::ReportRejected | Self::ReportFailed => Tone::Danger,
            Self::Prerendered { tone, .. } => *tone,
        }
    }

    #[must_use]
    pub const fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::ReportSent => Some("notice.report_sent"),
            Self::ReportRejected => Some("notice.report_rejected"),
            Self::ReportFailed => Some("notice.report_failed"),
            Self::LinkCopied => Some("notice.link_copied"),
            Self::Prerendered { .. } => None,
        }
    }
}

/// Blocking dialog that the user has to dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// Backend answered the click with an error field.
    ClickRefused(String),
    ClickFailed,
    CopyFailed(String),
}

impl Alert {
    #[must_use]
    pub const fn title_key(&self) -> &'static str {
        "alert.title"
    }

    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::ClickRefused(_) => "alert.click_refused",
            Self::ClickFailed => "alert.click_failed",
            Self::CopyFailed(_) => "alert.copy_failed",
        }
    }

    /// Server or platform text interpolated as `{detail}`.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::ClickRefused(detail) | Self::CopyFailed(detail) => Some(detail),
            Self::ClickFailed => None,
        }
    }
}

pub trait View {
    fn set_page_state(&self, state: PageState);

    fn show_welcome(&self, welcome: Welcome);

    /// Replace username, level, balance and skin in one step.
    fn show_profile(&self, profile: &ProfileSnapshot);

    fn set_balance(&self, coins: u64);

    /// Toggle the highlight class on the coin button.
    fn set_pulse(&self, active: bool);

    fn show_alert(&self, alert: Alert);

    fn show_notice(&self, notice: Notice);

    fn open_report_dialog(&self);

    fn close_report_dialog(&self);

    fn reset_report_form(&self);

    /// Turn notifications already present in the host page into live toasts.
    fn activate_notifications(&self);

    /// Select the referral input's text and return it, if the input exists.
    fn select_referral_link(&self) -> Option<String>;
}
