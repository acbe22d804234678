use crate::i18n::{self, locales};
use web_sys::HtmlSelectElement;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: String,
    pub on_change: Callback<String>,
}

/// Locale picker. A choice made here is the one that gets saved.
#[function_component(LanguageSwitch)]
pub fn language_switch(props: &Props) -> Html {
    let on_change = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };

    html! {
        <label class="flex items-center gap-2 self-end text-xs opacity-70" for="language-select">
            { i18n::t("language.label") }
            <select id="language-select" class="select select-bordered select-xs" onchange={on_change}>
                { for locales().iter().map(|meta| html! {
                    <option value={meta.code} selected={meta.code == props.current_lang}>{ meta.name }</option>
                }) }
            </select>
        </label>
    }
}
