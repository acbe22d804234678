use crate::i18n;
use dubnacoin_core::{ProfileSnapshot, Welcome};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub welcome: Welcome,
    #[prop_or_default]
    pub profile: Option<ProfileSnapshot>,
}

fn welcome_line(welcome: &Welcome) -> Html {
    if let Welcome::Greeting(name) = welcome {
        let (before, after) = i18n::split_placeholder(&i18n::t(welcome.message_key()), "name");
        if let Some(after) = after {
            return html! {
                <>
                    { before }
                    <span class="text-primary">{ name.clone() }</span>
                    { after }
                </>
            };
        }
    }
    html! { <>{ i18n::welcome_text(welcome) }</> }
}

/// Welcome line plus level and balance.
#[function_component(ProfileCard)]
pub fn profile_card(props: &Props) -> Html {
    let failed = matches!(
        props.welcome,
        Welcome::Rejected(_) | Welcome::NetworkError | Welcome::OpenInTelegram
    );
    let welcome_class = classes!("text-xl", "font-semibold", failed.then_some("text-error"));
    let (level, coins) = props
        .profile
        .as_ref()
        .map(|p| (p.level.to_string(), p.coins.to_string()))
        .unwrap_or_default();

    html! {
        <section class="card bg-base-200 shadow-md" aria-labelledby="welcome-message">
            <div class="card-body items-center text-center gap-2">
                <h1 id="welcome-message" class={welcome_class} aria-live="polite">
                    { welcome_line(&props.welcome) }
                </h1>
                <div class="stats stats-horizontal shadow">
                    <div class="stat place-items-center">
                        <div class="stat-title">{ i18n::t("profile.level") }</div>
                        <div id="level" class="stat-value text-2xl">{ level }</div>
                    </div>
                    <div class="stat place-items-center">
                        <div class="stat-title">{ i18n::t("profile.coins") }</div>
                        <div id="coins" class="stat-value text-2xl">{ coins }</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
