use crate::i18n::locales::{DEFAULT_LANG, FALLBACK_LANG, is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

#[cfg(all(not(test), target_arch = "wasm32"))]
const STORAGE_KEY: &str = "dubnacoin.locale";

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let fallback = load_translations(FALLBACK_LANG)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        lang: FALLBACK_LANG.to_string(),
        translations: Value::Object(serde_json::Map::new()),
        fallback: Value::Object(serde_json::Map::new()),
    }
}

fn saved_lang() -> Option<String> {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .filter(|lang| is_supported(lang))
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        None
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang().unwrap_or_else(|| DEFAULT_LANG.to_string());
        build_bundle(&initial)
            .or_else(|| build_bundle(FALLBACK_LANG))
            .unwrap_or_else(empty_bundle)
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

fn apply_lang(lang: &str) -> bool {
    let Some(bundle) = build_bundle(lang) else {
        return false;
    };
    replace_bundle(bundle);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", lang);
        }
    }
    true
}

/// Apply the saved or default language to the document without persisting it.
///
/// Nothing is written to storage here, so a first visit can still follow the
/// Telegram user's language once launch data is read.
pub fn init_lang() -> String {
    let lang = current_lang();
    apply_lang(&lang);
    lang
}

/// Set the current language and persist the choice to localStorage.
///
/// Meant for explicit user choices. Unknown languages are ignored.
pub fn set_lang(lang: &str) {
    if apply_lang(lang) {
        #[cfg(all(not(test), target_arch = "wasm32"))]
        {
            if let Some(storage) =
                web_sys::window().and_then(|win| win.local_storage().ok().flatten())
            {
                let _ = storage.set_item(STORAGE_KEY, lang);
            }
        }
    }
}

/// Follow the Telegram user's language unless a choice was saved earlier.
///
/// Accepts region-qualified codes such as `en-US`. Returns the active
/// language afterwards.
pub fn adopt_host_language(language_code: Option<&str>) -> String {
    if saved_lang().is_none() {
        let primary = language_code
            .and_then(|code| code.split(['-', '_']).next())
            .map(str::to_ascii_lowercase);
        if let Some(lang) = primary.filter(|lang| is_supported(lang)) {
            apply_lang(&lang);
        }
    }
    current_lang()
}

/// Get the current active language code.
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}
