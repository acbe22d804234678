mod bundle;
mod locales;
mod messages;
mod render;

pub use bundle::{I18nBundle, adopt_host_language, current_lang, init_lang, set_lang};
pub use locales::{LocaleMeta, locales};
pub use messages::{alert_text, notice_text, welcome_text};
pub use render::{split_placeholder, t, tr};
