use crate::components::modal::Modal;
use crate::i18n;
use web_sys::HtmlTextAreaElement;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    /// Current form contents; kept by the parent so a failed submit retains them.
    pub draft: AttrValue,
    pub on_input: Callback<String>,
    pub on_submit: Callback<SubmitEvent>,
    pub on_close: Callback<()>,
}

#[function_component(ReportDialog)]
pub fn report_dialog(props: &Props) -> Html {
    let on_input = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            cb.emit(area.value());
        })
    };
    let on_cancel = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <Modal
            id={AttrValue::from("error-modal")}
            open={props.open}
            title={i18n::t("report.title")}
            on_close={props.on_close.clone()}
        >
            <form id="error-form" class="flex flex-col gap-3" onsubmit={props.on_submit.clone()}>
                <label class="form-control w-full" for="error-message">
                    <span class="label-text">{ i18n::t("report.label") }</span>
                </label>
                <textarea
                    id="error-message"
                    name="error_message"
                    class="textarea textarea-bordered w-full"
                    rows="4"
                    required=true
                    placeholder={i18n::t("report.placeholder")}
                    value={props.draft.clone()}
                    oninput={on_input}
                />
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" onclick={on_cancel}>
                        { i18n::t("report.cancel") }
                    </button>
                    <button type="submit" class="btn btn-primary">{ i18n::t("report.submit") }</button>
                </div>
            </form>
        </Modal>
    }
}
