//! Thin wrappers over the browser APIs the dashboard needs.

use crate::config::{ClientConfig, CONFIG_GLOBAL};
use crate::dashboard::Tab;
use crate::error::ConfigError;
use chrono::NaiveDateTime;
use shared::format::format_timestamp;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::window;

pub fn alert(message: &str) {
    if let Some(window) = window() {
        if let Err(err) = window.alert_with_message(message) {
            warn!(?err, "alert failed");
        }
    }
}

/// A dialog that cannot be shown counts as "no".
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn current_tab() -> Tab {
    window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Tab::from_path(&path))
        .unwrap_or(Tab::Tasks)
}

/// Updates the address bar without reloading.
pub fn push_route(path: &str) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            warn!(?err, path, "pushState failed");
        }
    }
}

pub fn load_config() -> Result<ClientConfig, ConfigError> {
    let window = window().ok_or(ConfigError::Missing(CONFIG_GLOBAL))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|err| ConfigError::Invalid(format!("{:?}", err)))?;
    if value.is_undefined() || value.is_null() {
        return Err(ConfigError::Missing(CONFIG_GLOBAL));
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| ConfigError::Invalid(err.to_string()))
}

/// Server timestamps carry no zone; they are shown as local wall-clock time
/// in the user's locale.
pub fn locale_timestamp(timestamp: &NaiveDateTime) -> String {
    let iso = timestamp.format("%Y-%m-%dT%H:%M:%S%.3f").to_string();
    let date = js_sys::Date::new(&JsValue::from_str(&iso));
    if date.get_time().is_nan() {
        return format_timestamp(timestamp);
    }
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}
