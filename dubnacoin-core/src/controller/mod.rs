//! Session bootstrap and the interaction handlers it unlocks.
//!
//! [`Bootstrapper`] runs once per page load. On success it hands back an
//! [`Interactions`] value, which is the only way to reach the click, report,
//! navigation and referral handlers.

mod bootstrap;
mod click;
mod interactions;
mod referral;
mod report;

pub use bootstrap::{BootstrapOutcome, Bootstrapper};
pub use interactions::{Destination, Interactions, navigation_url};
pub use referral::referral_link;
pub use report::ReportStatus;

use crate::api::Api;

/// Everything a handler talks to, resolved once and shared by reference.
pub struct Services<T, V, P> {
    pub api: Api<T>,
    pub view: V,
    pub platform: P,
}

impl<T, V, P> Services<T, V, P> {
    pub const fn new(api: Api<T>, view: V, platform: P) -> Self {
        Self {
            api,
            view,
            platform,
        }
    }
}
