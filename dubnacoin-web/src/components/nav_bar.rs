use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub on_shop: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub on_friends: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub on_report: Option<Callback<MouseEvent>>,
}

fn nav_button(
    id: &'static str,
    label_key: &str,
    class: &'static str,
    cb: Option<&Callback<MouseEvent>>,
) -> Html {
    html! {
        <button
            id={id}
            type="button"
            class={classes!("btn", class)}
            disabled={cb.is_none()}
            onclick={cb.cloned()}
        >
            { i18n::t(label_key) }
        </button>
    }
}

/// Shop, friends and error-report entry points. Rendered only once the session is ready.
#[function_component(NavBar)]
pub fn nav_bar(props: &Props) -> Html {
    html! {
        <nav class="flex flex-wrap justify-center gap-2" aria-label="main">
            { nav_button("shop-button", "nav.shop", "btn-primary", props.on_shop.as_ref()) }
            { nav_button("friends-button", "nav.friends", "btn-secondary", props.on_friends.as_ref()) }
            { nav_button("report-error-button", "nav.report", "btn-outline", props.on_report.as_ref()) }
        </nav>
    }
}
