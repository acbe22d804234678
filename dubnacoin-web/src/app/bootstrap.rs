#[cfg(target_arch = "wasm32")]
use crate::app::binding::{WebServices, WebView};
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use crate::platform::BrowserPlatform;
#[cfg(target_arch = "wasm32")]
use crate::transport::FetchTransport;
#[cfg(target_arch = "wasm32")]
use dubnacoin_core::{Api, BootstrapOutcome, Bootstrapper, ClientConfig};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
fn build_services(app_state: &AppState, config: ClientConfig) -> Rc<WebServices> {
    let view = WebView::new(app_state, config.toast_ms);
    Rc::new(WebServices::new(
        Api::new(FetchTransport, config),
        view,
        BrowserPlatform,
    ))
}

/// Publish the controls that only exist once the session is ready.
#[cfg(target_arch = "wasm32")]
fn adopt_outcome(
    app_state: &AppState,
    outcome: BootstrapOutcome<FetchTransport, WebView, BrowserPlatform>,
) {
    let Some(interactions) = outcome.interactions() else {
        return;
    };
    crate::bridge::notify_ready();
    app_state
        .referral_link
        .set(interactions.referral_link().map(AttrValue::from));
    app_state.interactions.set(Some(interactions));
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let app_state = app_state.clone();
    use_effect_with((), move |()| {
        let config = crate::config::client_config();
        let launch = crate::bridge::read_launch_context(&config);
        if let Ok(context) = &launch {
            let lang = crate::i18n::adopt_host_language(context.language_code());
            app_state.current_language.set(lang);
        }
        let services = build_services(&app_state, config);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = Bootstrapper::new(services, launch).run().await;
            adopt_outcome(&app_state, outcome);
        });
        || {}
    });
}

/// Server rendering never runs effects, so the page stays in `Loading`.
#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_bootstrap(_app_state: &AppState) {}
