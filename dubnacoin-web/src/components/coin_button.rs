use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Image source for the equipped skin; `None` until the profile arrives.
    #[prop_or_default]
    pub skin_src: Option<AttrValue>,
    #[prop_or_default]
    pub pulse: bool,
    /// Present only while the session is ready.
    #[prop_or_default]
    pub on_click: Option<Callback<MouseEvent>>,
}

#[function_component(CoinButton)]
pub fn coin_button(props: &Props) -> Html {
    let inert = props.on_click.is_none();
    let class = classes!(
        "btn",
        "btn-circle",
        "btn-ghost",
        "w-48",
        "h-48",
        "coin-button",
        props.pulse.then_some("flash")
    );

    html! {
        <button
            id="coin-button"
            type="button"
            class={class}
            aria-label={i18n::t("coin.label")}
            disabled={inert}
            aria-disabled={inert.to_string()}
            onclick={props.on_click.clone()}
        >
            { props.skin_src.clone().map(|src| html! {
                <img id="coin-image" class="w-full h-full" src={src} alt={i18n::t("coin.skin_alt")} draggable="false" />
            }).unwrap_or_default() }
        </button>
    }
}
