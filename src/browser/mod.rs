//! DOM wiring for the portal behaviors.
//!
//! `start` runs once when the module is instantiated. Each behavior installs
//! independently; a failure is logged and the rest still install.

mod controls;
mod dom;
mod filter;
mod session;
mod widgets;

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Window};

use crate::config::{PortalConfig, timeout_minutes_from_number, timeout_minutes_from_str};
use crate::consts::{PORTAL_CONFIG_ID, SESSION_TIMEOUT_GLOBAL};
use crate::error::PortalError;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("logger already installed: {err}");
    }

    if let Err(err) = install() {
        log::warn!("portal behaviors not installed: {err}");
    }
}

fn install() -> Result<(), PortalError> {
    let window = dom::window()?;
    let doc = dom::document()?;
    let config = load_config(&doc);
    log::debug!("portal config: {config:?}");

    report("session monitor", session::install(&doc, &window, &config));
    report("alert auto-dismiss", controls::install_alert_auto_dismiss(&doc, &config));
    report("delete confirmation", controls::install_delete_confirmation(&doc, &window));
    report("download buttons", controls::install_download_buttons(&doc, &config));
    report("form validation", controls::install_form_validation(&doc));
    report("password meter", controls::install_password_meter(&doc));
    report("tooltips", controls::install_tooltips(&doc));
    report("filterFiles global", expose_filter(&window));
    Ok(())
}

fn report(component: &str, result: Result<(), PortalError>) {
    if let Err(err) = result {
        log::warn!("{component} not installed: {err}");
    }
}

/// Resolve configuration from the JSON block and the timeout global.
fn load_config(doc: &Document) -> PortalConfig {
    let base = match dom::by_id(doc, PORTAL_CONFIG_ID).and_then(|el| el.text_content()) {
        Some(raw) => PortalConfig::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("ignoring #{PORTAL_CONFIG_ID}: {err}");
            PortalConfig::default()
        }),
        None => PortalConfig::default(),
    };
    base.with_timeout_override(timeout_global())
}

fn timeout_global() -> Option<u32> {
    let value = match Reflect::get(&js_sys::global(), &JsValue::from_str(SESSION_TIMEOUT_GLOBAL)) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("could not read {SESSION_TIMEOUT_GLOBAL}: {err:?}");
            return None;
        }
    };
    if let Some(number) = value.as_f64() {
        return timeout_minutes_from_number(number);
    }
    value.as_string().and_then(|raw| timeout_minutes_from_str(&raw))
}

/// Publish [`filter_files`] on `window` so inline `onkeyup`/`onchange`
/// attributes can reach it without importing the module.
fn expose_filter(window: &Window) -> Result<(), PortalError> {
    let callback = Closure::<dyn Fn()>::new(filter_files);
    Reflect::set(window, &JsValue::from_str("filterFiles"), callback.as_ref())?;
    callback.forget();
    Ok(())
}

/// Re-filter the file table from the search and category controls.
///
/// Exported as the global `filterFiles` for use from markup event handlers.
#[wasm_bindgen(js_name = filterFiles)]
pub fn filter_files() {
    let result = dom::document().and_then(|doc| filter::apply(&doc));
    if let Err(err) = result {
        log::warn!("file filter failed: {err}");
    }
}
