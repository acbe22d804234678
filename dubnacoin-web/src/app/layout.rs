use crate::app::handlers::{SessionHandlers, UiHandlers};
use crate::app::state::AppState;
use crate::components::coin_button::CoinButton;
use crate::components::language_switch::LanguageSwitch;
use crate::components::modal::Modal;
use crate::components::nav_bar::NavBar;
use crate::components::profile_card::ProfileCard;
use crate::components::referral_bar::ReferralBar;
use crate::components::report_dialog::ReportDialog;
use crate::components::toast::{ToastItem, ToastStack};
use crate::i18n;
use dubnacoin_core::{Alert, ClientConfig};
use yew::prelude::*;

fn render_alert(alert: Option<&Alert>, on_close: &Callback<()>) -> Html {
    let Some(alert) = alert else {
        return Html::default();
    };
    let on_ok = {
        let cb = on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let actions = html! {
        <button type="button" class="btn btn-primary" onclick={on_ok}>{ i18n::t("dialog.ok") }</button>
    };
    html! {
        <Modal
            id={AttrValue::from("alert-modal")}
            open=true
            title={i18n::t(alert.title_key())}
            on_close={on_close.clone()}
            actions={actions}
        >
            <p>{ i18n::alert_text(alert) }</p>
        </Modal>
    }
}

fn toast_items(state: &AppState) -> Vec<ToastItem> {
    state
        .toasts
        .entries
        .iter()
        .map(|entry| ToastItem {
            id: entry.id,
            text: AttrValue::from(i18n::notice_text(&entry.notice)),
            tone: entry.notice.tone(),
        })
        .collect()
}

pub fn render_app(state: &AppState, config: &ClientConfig) -> Html {
    let ui = UiHandlers::new(state);
    let session = (*state.interactions)
        .as_ref()
        .filter(|_| state.is_ready())
        .map(|interactions| SessionHandlers::new(interactions, state));

    let profile = state.profile.profile.clone();
    let skin_src = profile
        .as_ref()
        .map(|p| AttrValue::from(config.skin_url(&p.skin)));
    let referral = match (&session, (*state.referral_link).clone()) {
        (Some(handlers), Some(link)) => html! {
            <ReferralBar link={link} on_copy={handlers.copy_referral.clone()} />
        },
        _ => Html::default(),
    };
    let submit = session
        .as_ref()
        .map_or_else(Callback::noop, |handlers| handlers.submit_report.clone());

    html! {
        <main id="app" class="min-h-screen flex flex-col items-center gap-6 p-4" lang={(*state.current_language).clone()}>
            <LanguageSwitch
                current_lang={(*state.current_language).clone()}
                on_change={ui.change_language.clone()}
            />
            <ProfileCard welcome={(*state.welcome).clone()} profile={profile} />
            <CoinButton
                skin_src={skin_src}
                pulse={*state.pulse}
                on_click={session.as_ref().map(|h| h.click.clone())}
            />
            <NavBar
                on_shop={session.as_ref().map(|h| h.shop.clone())}
                on_friends={session.as_ref().map(|h| h.friends.clone())}
                on_report={session.as_ref().map(|h| h.open_report.clone())}
            />
            { referral }
            <ReportDialog
                open={*state.report_open}
                draft={(*state.report_draft).clone()}
                on_input={ui.report_input.clone()}
                on_submit={submit}
                on_close={ui.close_report.clone()}
            />
            { render_alert((*state.alert).as_ref(), &ui.dismiss_alert) }
            <ToastStack toasts={toast_items(state)} on_dismiss={ui.dismiss_toast.clone()} />
        </main>
    }
}
