use dubnacoin_core::{Alert, Notice, Tone, Welcome};
use dubnacoin_web::i18n;
use std::collections::BTreeMap;

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");

    let mut vars = BTreeMap::new();
    vars.insert("name", "Ann");
    assert_eq!(i18n::tr("welcome.greeting", Some(&vars)), "Welcome, Ann!");
    assert_eq!(i18n::t("missing.key"), "missing.key");

    i18n::set_lang("ru");
    assert_eq!(i18n::current_lang(), "ru");
    assert_eq!(i18n::tr("welcome.greeting", Some(&vars)), "Добро пожаловать, Ann!");

    i18n::set_lang("xx");
    assert_eq!(i18n::current_lang(), "ru");
}

#[test]
fn locales_list_both_bundles() {
    let codes: Vec<&str> = i18n::locales().iter().map(|meta| meta.code).collect();
    assert_eq!(codes, vec!["ru", "en"]);
}

#[test]
fn semantic_messages_render_with_details() {
    i18n::set_lang("en");
    assert_eq!(
        i18n::alert_text(&Alert::ClickRefused("Invalid token".into())),
        "Invalid token"
    );
    assert!(i18n::alert_text(&Alert::CopyFailed("denied".into())).ends_with("denied"));
    assert_eq!(
        i18n::notice_text(&Notice::LinkCopied),
        "Link copied to clipboard!"
    );
    assert_eq!(
        i18n::notice_text(&Notice::Prerendered {
            text: "Скин куплен".into(),
            tone: Tone::Success,
        }),
        "Скин куплен"
    );
    assert_eq!(
        i18n::welcome_text(&Welcome::Rejected("bad hash".into())),
        "Error: bad hash"
    );
}

#[test]
fn host_language_falls_back_to_the_active_bundle() {
    i18n::set_lang("ru");
    assert_eq!(i18n::adopt_host_language(Some("en_GB")), "en");
    assert_eq!(i18n::adopt_host_language(Some("uk")), "en");
}
