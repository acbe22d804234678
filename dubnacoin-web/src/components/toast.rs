use dubnacoin_core::Tone;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct ToastItem {
    pub id: usize,
    pub text: AttrValue,
    pub tone: Tone,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub toasts: Vec<ToastItem>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<usize>>,
}

const fn alert_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Info => "alert-info",
        Tone::Success => "alert-success",
        Tone::Danger => "alert-error",
    }
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastProps) -> Html {
    html! {
        <div id="toast-container" class="toast toast-end toast-top" role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| {
                let dismiss_btn = props.on_dismiss.as_ref().map(|cb| {
                    let id = toast.id;
                    let cb = cb.clone();
                    let on_click = Callback::from(move |_: MouseEvent| cb.emit(id));
                    html! {
                        <button
                            type="button"
                            class="btn btn-ghost btn-xs"
                            aria-label={crate::i18n::t("dialog.dismiss")}
                            onclick={on_click}
                        >
                            {"✕"}
                        </button>
                    }
                }).unwrap_or_default();
                html! {
                    <div
                        key={toast.id}
                        class={classes!("alert", alert_class(toast.tone), "flex", "items-center", "gap-2", "max-w-sm")}
                        role="alert"
                    >
                        <span class="toast-body">{ toast.text.clone() }</span>
                        { dismiss_btn }
                    </div>
                }
            }) }
        </div>
    }
}
