#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod bridge;
pub mod components;
pub mod config;
pub mod dom;
pub mod i18n;
pub mod platform;
pub mod transport;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    // <html lang> follows the saved or default locale before the first paint
    crate::i18n::init_lang();
    yew::Renderer::<app::App>::new().render();
}
