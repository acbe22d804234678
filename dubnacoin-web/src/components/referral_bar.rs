use crate::i18n;
use yew::prelude::*;

pub const REFERRAL_INPUT_ID: &str = "referral-link-input";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub link: AttrValue,
    pub on_copy: Callback<MouseEvent>,
}

#[function_component(ReferralBar)]
pub fn referral_bar(props: &Props) -> Html {
    html! {
        <section class="w-full max-w-md" aria-labelledby="referral-title">
            <h2 id="referral-title" class="font-semibold mb-1">{ i18n::t("referral.title") }</h2>
            <div class="join w-full">
                <input
                    id={REFERRAL_INPUT_ID}
                    class="input input-bordered join-item w-full"
                    type="text"
                    readonly=true
                    value={props.link.clone()}
                />
                <button id="copy-button" type="button" class="btn btn-accent join-item" onclick={props.on_copy.clone()}>
                    { i18n::t("referral.copy") }
                </button>
            </div>
        </section>
    }
}
