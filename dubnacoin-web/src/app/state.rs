use crate::app::binding::WebInteractions;
use dubnacoin_core::{Alert, Notice, PageState, ProfileSnapshot, Welcome};
use std::rc::Rc;
use yew::prelude::*;

/// Profile as last written by the controller.
///
/// A reducer so that balance updates landing after an `await` apply to the
/// latest snapshot rather than the one captured when the task started.
#[derive(Clone, PartialEq, Default)]
pub struct ProfileState {
    pub profile: Option<ProfileSnapshot>,
}

pub enum ProfileAction {
    Replace(ProfileSnapshot),
    Balance(u64),
}

impl Reducible for ProfileState {
    type Action = ProfileAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ProfileAction::Replace(profile) => Rc::new(Self {
                profile: Some(profile),
            }),
            ProfileAction::Balance(coins) => match &self.profile {
                Some(profile) => Rc::new(Self {
                    profile: Some(ProfileSnapshot {
                        coins,
                        ..profile.clone()
                    }),
                }),
                None => self,
            },
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastEntry {
    pub id: usize,
    pub notice: Notice,
}

#[derive(Clone, PartialEq, Default)]
pub struct ToastQueue {
    pub entries: Vec<ToastEntry>,
}

pub enum ToastAction {
    Push(ToastEntry),
    Dismiss(usize),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut entries = self.entries.clone();
        match action {
            ToastAction::Push(entry) => entries.push(entry),
            ToastAction::Dismiss(id) => {
                if !entries.iter().any(|entry| entry.id == id) {
                    return self;
                }
                entries.retain(|entry| entry.id != id);
            }
        }
        Rc::new(Self { entries })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub page: UseStateHandle<PageState>,
    pub welcome: UseStateHandle<Welcome>,
    pub profile: UseReducerHandle<ProfileState>,
    pub pulse: UseStateHandle<bool>,
    pub alert: UseStateHandle<Option<Alert>>,
    pub toasts: UseReducerHandle<ToastQueue>,
    pub report_open: UseStateHandle<bool>,
    pub report_draft: UseStateHandle<AttrValue>,
    pub interactions: UseStateHandle<Option<WebInteractions>>,
    pub referral_link: UseStateHandle<Option<AttrValue>>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        page: use_state(PageState::default),
        welcome: use_state(Welcome::default),
        profile: use_reducer(ProfileState::default),
        pulse: use_state(|| false),
        alert: use_state(|| None::<Alert>),
        toasts: use_reducer(ToastQueue::default),
        report_open: use_state(|| false),
        report_draft: use_state(AttrValue::default),
        interactions: use_state(|| None::<WebInteractions>),
        referral_link: use_state(|| None::<AttrValue>),
        current_language: use_state(crate::i18n::current_lang),
    }
}

impl AppState {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.page.permits_interaction() && self.interactions.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_update_keeps_other_profile_fields() {
        let state = Rc::new(ProfileState::default());
        let state = state.reduce(ProfileAction::Balance(10));
        assert!(state.profile.is_none());

        let state = state.reduce(ProfileAction::Replace(ProfileSnapshot::new(
            "Ann", 3, 42, "gold.png",
        )));
        let state = state.reduce(ProfileAction::Balance(50));
        assert_eq!(
            state.profile,
            Some(ProfileSnapshot::new("Ann", 3, 50, "gold.png"))
        );
    }

    #[test]
    fn toast_queue_pushes_and_dismisses_by_id() {
        let queue = Rc::new(ToastQueue::default());
        let queue = queue.reduce(ToastAction::Push(ToastEntry {
            id: 1,
            notice: Notice::ReportSent,
        }));
        let queue = queue.reduce(ToastAction::Push(ToastEntry {
            id: 2,
            notice: Notice::LinkCopied,
        }));
        let queue = queue.reduce(ToastAction::Dismiss(1));
        assert_eq!(queue.entries.len(), 1);
        assert_eq!(queue.entries[0].id, 2);

        let unchanged = Rc::clone(&queue).reduce(ToastAction::Dismiss(9));
        assert!(Rc::ptr_eq(&queue, &unchanged));
    }
}
