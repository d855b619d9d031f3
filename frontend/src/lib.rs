pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(target_arch = "wasm32")]
mod view;

pub use api::{ApiClient, Transport};
pub use config::ClientConfig;
pub use dashboard::{ApiCall, Dashboard, Effect, Msg, Operation, Tab};
pub use error::{ApiError, ConfigError};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = browser::load_config().map_err(|err| {
        tracing::error!(%err, "cannot start the dashboard");
        wasm_bindgen::JsValue::from_str(&err.to_string())
    })?;
    tracing::info!(?config, "starting task dashboard");

    sauron::prelude::Program::mount_to_body(app::App::new(config));
    Ok(())
}
