use crate::app::state::{AppState, ProfileAction, ToastAction, ToastEntry};
use crate::components::referral_bar::REFERRAL_INPUT_ID;
use crate::dom;
use crate::platform::BrowserPlatform;
use crate::transport::FetchTransport;
use dubnacoin_core::{
    Alert, Interactions, Notice, PageState, ProfileSnapshot, Services, View, Welcome,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

pub type WebServices = Services<FetchTransport, WebView, BrowserPlatform>;
pub type WebInteractions = Interactions<FetchTransport, WebView, BrowserPlatform>;

static TOAST_IDS: AtomicUsize = AtomicUsize::new(0);

/// [`View`] over the app's hook handles.
///
/// Every write goes through a setter or reducer dispatch, so the controller
/// can keep this across `await` points without reading stale values.
pub struct WebView {
    page: UseStateHandle<PageState>,
    welcome: UseStateHandle<Welcome>,
    profile: UseReducerHandle<crate::app::state::ProfileState>,
    pulse: UseStateHandle<bool>,
    alert: UseStateHandle<Option<Alert>>,
    toasts: UseReducerHandle<crate::app::state::ToastQueue>,
    report_open: UseStateHandle<bool>,
    report_draft: UseStateHandle<AttrValue>,
    toast_ms: u32,
}

impl WebView {
    #[must_use]
    pub fn new(state: &AppState, toast_ms: u32) -> Self {
        Self {
            page: state.page.clone(),
            welcome: state.welcome.clone(),
            profile: state.profile.clone(),
            pulse: state.pulse.clone(),
            alert: state.alert.clone(),
            toasts: state.toasts.clone(),
            report_open: state.report_open.clone(),
            report_draft: state.report_draft.clone(),
            toast_ms,
        }
    }

    fn push_toast(&self, notice: Notice) {
        let id = TOAST_IDS.fetch_add(1, Ordering::Relaxed);
        self.toasts.dispatch(ToastAction::Push(ToastEntry { id, notice }));
        schedule_dismiss(self.toasts.clone(), id, self.toast_ms);
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(
    toasts: UseReducerHandle<crate::app::state::ToastQueue>,
    id: usize,
    delay_ms: u32,
) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo::timers::future::TimeoutFuture::new(delay_ms).await;
        toasts.dispatch(ToastAction::Dismiss(id));
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(
    _toasts: UseReducerHandle<crate::app::state::ToastQueue>,
    _id: usize,
    _delay_ms: u32,
) {
}

impl View for WebView {
    fn set_page_state(&self, state: PageState) {
        self.page.set(state);
    }

    fn show_welcome(&self, welcome: Welcome) {
        self.welcome.set(welcome);
    }

    fn show_profile(&self, profile: &ProfileSnapshot) {
        self.profile.dispatch(ProfileAction::Replace(profile.clone()));
    }

    fn set_balance(&self, coins: u64) {
        self.profile.dispatch(ProfileAction::Balance(coins));
    }

    fn set_pulse(&self, active: bool) {
        self.pulse.set(active);
    }

    fn show_alert(&self, alert: Alert) {
        self.alert.set(Some(alert));
    }

    fn show_notice(&self, notice: Notice) {
        self.push_toast(notice);
    }

    fn open_report_dialog(&self) {
        self.report_open.set(true);
    }

    fn close_report_dialog(&self) {
        self.report_open.set(false);
    }

    fn reset_report_form(&self) {
        self.report_draft.set(AttrValue::default());
    }

    fn activate_notifications(&self) {
        for (text, tone) in dom::take_prerendered_notices() {
            self.push_toast(Notice::Prerendered { text, tone });
        }
    }

    fn select_referral_link(&self) -> Option<String> {
        dom::select_input_text(REFERRAL_INPUT_ID)
    }
}
