//! DubnaCoin client core
//!
//! Platform-agnostic session bootstrap and interaction logic for the DubnaCoin
//! Telegram Mini App. Front ends plug in a [`Transport`], a [`View`] and a
//! [`Platform`]; this crate decides what to send and what to show.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod launch;
pub mod platform;
pub mod protocol;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use api::{Api, Transport};
pub use config::{ClientConfig, DEFAULT_SKIN, PULSE_MS, TOAST_MS};
pub use controller::{
    BootstrapOutcome, Bootstrapper, Destination, Interactions, ReportStatus, Services,
    navigation_url, referral_link,
};
pub use error::{ApiError, LaunchError};
pub use launch::{LaunchContext, LaunchUser, user_from_init_data};
pub use platform::Platform;
pub use protocol::{ClickOutcome, InitOutcome};
pub use session::{PageState, ProfileSnapshot, Session, sanitize_skin};
pub use view::{Alert, Notice, Tone, View, Welcome};
