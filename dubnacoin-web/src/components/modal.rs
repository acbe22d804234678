use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub children: Children,
}

/// Blocking dialog. Closed by the X button, the backdrop or Escape.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    if !props.open {
        return Html::default();
    }

    let container_id = props
        .id
        .clone()
        .unwrap_or_else(|| AttrValue::from(format!("modal-{}", *modal_id)));
    let title_id = format!("{container_id}-title");

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    html! {
        <div
            id={container_id}
            class="modal modal-open"
            role="dialog"
            aria-modal="true"
            aria-labelledby={title_id.clone()}
            onkeydown={on_keydown}
        >
            <div class="modal-box">
                <div class="flex justify-between items-start">
                    <h3 id={title_id} class="font-bold text-lg">{ props.title.clone() }</h3>
                    <button
                        type="button"
                        class="btn btn-ghost btn-sm"
                        aria-label={crate::i18n::t("dialog.close")}
                        onclick={on_close.clone()}
                    >
                        {"✕"}
                    </button>
                </div>
                <div class="py-2">
                    { for props.children.iter() }
                </div>
                { props.actions.clone().map(|actions| html! {
                    <div class="modal-action">{ actions }</div>
                }).unwrap_or_default() }
            </div>
            <div class="modal-backdrop" onclick={on_close}></div>
        </div>
    }
}
