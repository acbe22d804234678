use super::Services;
use crate::config::{ClientConfig, endpoints};
use crate::platform::Platform;
use crate::session::Session;
use crate::view::View;
use std::rc::Rc;

/// Server-rendered views reached by full-page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Shop,
    Friends,
}

impl Destination {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Shop => endpoints::SHOP,
            Self::Friends => endpoints::FRIENDS,
        }
    }
}

/// URL for `destination`, carrying the session token when there is one.
#[must_use]
pub fn navigation_url(config: &ClientConfig, destination: Destination, session: &Session) -> String {
    let base = config.endpoint(destination.path());
    match session.token() {
        Some(token) => format!("{base}?token={}", urlencoding::encode(token)),
        None => base,
    }
}

/// Handlers available once the session is ready.
///
/// Built only by a successful bootstrap, so holding one proves the profile
/// data behind the controls has arrived.
pub struct Interactions<T, V, P> {
    pub(super) services: Rc<Services<T, V, P>>,
    pub(super) session: Session,
    pub(super) user_id: Option<i64>,
}

impl<T, V, P> Clone for Interactions<T, V, P> {
    fn clone(&self) -> Self {
        Self {
            services: Rc::clone(&self.services),
            session: self.session.clone(),
            user_id: self.user_id,
        }
    }
}

impl<T, V, P> PartialEq for Interactions<T, V, P> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.services, &other.services) && self.session == other.session
    }
}

impl<T, V: View, P> Interactions<T, V, P> {
    pub(super) fn init(
        services: Rc<Services<T, V, P>>,
        session: Session,
        user_id: Option<i64>,
    ) -> Self {
        services.view.activate_notifications();
        Self {
            services,
            session,
            user_id,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub fn open_report_dialog(&self) {
        self.services.view.open_report_dialog();
    }
}

impl<T, V, P: Platform> Interactions<T, V, P> {
    #[must_use]
    pub fn url_for(&self, destination: Destination) -> String {
        navigation_url(self.services.api.config(), destination, &self.session)
    }

    pub fn open(&self, destination: Destination) {
        let url = self.url_for(destination);
        log::info!("navigating to {}", destination.path());
        self.services.platform.navigate(&url);
    }

    pub fn open_shop(&self) {
        self.open(Destination::Shop);
    }

    pub fn open_friends(&self) {
        self.open(Destination::Friends);
    }
}
