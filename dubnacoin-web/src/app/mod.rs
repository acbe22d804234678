pub mod binding;
pub mod bootstrap;
pub mod handlers;
pub mod layout;
pub mod state;

pub use binding::{WebInteractions, WebServices, WebView};
pub use state::{AppState, use_app_state};

use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);
    let config = use_memo((), |()| crate::config::client_config());

    layout::render_app(&app_state, &config)
}

#[cfg(test)]
mod tests {
    use super::App;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn first_render_is_loading_with_controls_disabled() {
        crate::i18n::set_lang("en");
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(html.contains("id=\"welcome-message\""));
        assert!(html.contains("Loading"));
        assert!(html.contains("id=\"coin-button\""));
        assert!(html.contains("disabled"));
        assert!(!html.contains("id=\"referral-link-input\""));
        assert!(!html.contains("id=\"error-modal\""));
    }
}
