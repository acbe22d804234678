use crate::app::binding::WebInteractions;
use crate::app::state::{AppState, ToastAction};
use crate::i18n;
use dubnacoin_core::Destination;
use yew::prelude::*;

/// Callbacks that need a ready session. Built only from [`WebInteractions`].
#[derive(Clone)]
pub struct SessionHandlers {
    pub click: Callback<MouseEvent>,
    pub submit_report: Callback<SubmitEvent>,
    pub shop: Callback<MouseEvent>,
    pub friends: Callback<MouseEvent>,
    pub open_report: Callback<MouseEvent>,
    pub copy_referral: Callback<MouseEvent>,
}

impl SessionHandlers {
    #[must_use]
    pub fn new(interactions: &WebInteractions, state: &AppState) -> Self {
        Self {
            click: build_click(interactions),
            submit_report: build_submit_report(interactions, state),
            shop: build_navigation(interactions, Destination::Shop),
            friends: build_navigation(interactions, Destination::Friends),
            open_report: build_open_report(interactions),
            copy_referral: build_copy_referral(interactions),
        }
    }
}

/// Callbacks that only touch local UI state.
#[derive(Clone)]
pub struct UiHandlers {
    pub report_input: Callback<String>,
    pub close_report: Callback<()>,
    pub dismiss_alert: Callback<()>,
    pub dismiss_toast: Callback<usize>,
    pub change_language: Callback<String>,
}

impl UiHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        let report_input = {
            let draft = state.report_draft.clone();
            Callback::from(move |value: String| draft.set(AttrValue::from(value)))
        };
        let close_report = {
            let open = state.report_open.clone();
            Callback::from(move |()| open.set(false))
        };
        let dismiss_alert = {
            let alert = state.alert.clone();
            Callback::from(move |()| alert.set(None))
        };
        let dismiss_toast = {
            let toasts = state.toasts.clone();
            Callback::from(move |id: usize| toasts.dispatch(ToastAction::Dismiss(id)))
        };
        let change_language = {
            let current = state.current_language.clone();
            Callback::from(move |lang: String| {
                i18n::set_lang(&lang);
                current.set(i18n::current_lang());
            })
        };
        Self {
            report_input,
            close_report,
            dismiss_alert,
            dismiss_toast,
            change_language,
        }
    }
}

fn build_click(interactions: &WebInteractions) -> Callback<MouseEvent> {
    let interactions = interactions.clone();
    Callback::from(move |_: MouseEvent| {
        let interactions = interactions.clone();
        wasm_bindgen_futures::spawn_local(async move {
            // Failures are already on screen as an alert.
            let _ = interactions.click().await;
        });
    })
}

fn build_submit_report(interactions: &WebInteractions, state: &AppState) -> Callback<SubmitEvent> {
    let interactions = interactions.clone();
    let draft = state.report_draft.clone();
    Callback::from(move |event: SubmitEvent| {
        event.prevent_default();
        let message = draft.to_string();
        let interactions = interactions.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let status = interactions.submit_report(&message).await;
            log::debug!("report finished: {status:?}");
        });
    })
}

fn build_navigation(interactions: &WebInteractions, destination: Destination) -> Callback<MouseEvent> {
    let interactions = interactions.clone();
    Callback::from(move |_: MouseEvent| interactions.open(destination))
}

fn build_open_report(interactions: &WebInteractions) -> Callback<MouseEvent> {
    let interactions = interactions.clone();
    Callback::from(move |_: MouseEvent| interactions.open_report_dialog())
}

fn build_copy_referral(interactions: &WebInteractions) -> Callback<MouseEvent> {
    let interactions = interactions.clone();
    Callback::from(move |_: MouseEvent| {
        let interactions = interactions.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = interactions.copy_referral_link().await {
                log::warn!("referral link not copied: {err}");
            }
        });
    })
}
