use super::{Interactions, Services};
use crate::api::Transport;
use crate::error::{ApiError, LaunchError};
use crate::launch::LaunchContext;
use crate::platform::Platform;
use crate::protocol::InitOutcome;
use crate::session::PageState;
use crate::view::{View, Welcome};
use std::rc::Rc;

/// Terminal result of the one-shot bootstrap.
pub enum BootstrapOutcome<T, V, P> {
    Ready(Interactions<T, V, P>),
    Rejected(String),
    NetworkError(ApiError),
    Unsupported(LaunchError),
}

impl<T, V, P> BootstrapOutcome<T, V, P> {
    #[must_use]
    pub fn page_state(&self) -> PageState {
        match self {
            Self::Ready(_) => PageState::Ready,
            Self::Rejected(reason) => PageState::BootstrapFailed(reason.clone()),
            Self::NetworkError(_) => PageState::NetworkError,
            Self::Unsupported(_) => PageState::Unsupported,
        }
    }

    #[must_use]
    pub fn interactions(self) -> Option<Interactions<T, V, P>> {
        match self {
            Self::Ready(interactions) => Some(interactions),
            _ => None,
        }
    }
}

/// Converts a launch context into a session. Consumed by [`Bootstrapper::run`].
pub struct Bootstrapper<T, V, P> {
    services: Rc<Services<T, V, P>>,
    launch: Result<LaunchContext, LaunchError>,
}

impl<T, V, P> Bootstrapper<T, V, P>
where
    T: Transport,
    V: View,
    P: Platform,
{
    pub const fn new(
        services: Rc<Services<T, V, P>>,
        launch: Result<LaunchContext, LaunchError>,
    ) -> Self {
        Self { services, launch }
    }

    pub async fn run(self) -> BootstrapOutcome<T, V, P> {
        let Self { services, launch } = self;
        let view = &services.view;
        view.set_page_state(PageState::Loading);
        view.show_welcome(Welcome::Loading);

        let launch = match launch {
            Ok(launch) => launch,
            Err(err) => {
                log::warn!("bootstrap skipped: {err}");
                view.show_welcome(Welcome::OpenInTelegram);
                view.set_page_state(PageState::Unsupported);
                return BootstrapOutcome::Unsupported(err);
            }
        };
        log::info!(
            "bootstrapping session (referrer: {})",
            launch.referrer_id.as_deref().unwrap_or("none")
        );

        let response = match services.api.process_init_data(&launch).await {
            Ok(response) => response,
            Err(err) => {
                log::error!("bootstrap request failed: {err}");
                view.show_welcome(Welcome::NetworkError);
                view.set_page_state(PageState::NetworkError);
                return BootstrapOutcome::NetworkError(err);
            }
        };

        let fallback_name = launch
            .user
            .as_ref()
            .map(crate::launch::LaunchUser::display_name)
            .unwrap_or_default();
        match response.into_outcome(&fallback_name) {
            InitOutcome::Accepted { session, profile } => {
                view.show_profile(&profile);
                view.show_welcome(Welcome::greeting(&profile.username));
                view.set_page_state(PageState::Ready);
                log::info!("session ready at level {}", profile.level);
                let interactions = Interactions::init(
                    Rc::clone(&services),
                    session,
                    launch.user_id(),
                );
                BootstrapOutcome::Ready(interactions)
            }
            InitOutcome::Rejected(reason) => {
                log::warn!("bootstrap rejected: {reason}");
                view.show_welcome(Welcome::Rejected(reason.clone()));
                view.set_page_state(PageState::BootstrapFailed(reason.clone()));
                BootstrapOutcome::Rejected(reason)
            }
        }
    }
}
