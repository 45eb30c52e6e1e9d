pub mod app;
pub mod cipher_tabs;
pub mod shared;

use contracts::PageConfig;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::app::{expose_toggle_input_type, BrowserCipherPage};
use crate::shared::error::DomError;

/// Optional `<script type="application/json">` element with page settings
const CONFIG_ELEMENT_ID: &str = "cipher-page-config";

fn read_page_config() -> Result<PageConfig, DomError> {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match json {
        Some(json) => Ok(PageConfig::from_json(&json)?),
        None => Ok(PageConfig::default()),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    let config = read_page_config();
    let level = config
        .as_ref()
        .ok()
        .and_then(|c| c.log_level.parse().ok())
        .unwrap_or(log::Level::Info);

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = config.unwrap_or_else(|err| {
        log::warn!("{err}, using defaults");
        PageConfig::default()
    });

    // Inline `onchange` handlers resolve this on `window`
    match web_sys::window() {
        Some(window) => {
            if let Err(err) = expose_toggle_input_type(&window) {
                log::warn!("toggleInputType not published: {err}");
            }
        }
        None => log::warn!("no window, toggleInputType not published"),
    }

    if let Err(err) = BrowserCipherPage::mount(&config) {
        log::warn!("cipher page not mounted: {err}");
    }
}
