//! Runtime configuration injected by the hosting page.
//!
//! The dashboard never carries credentials of its own. The page that loads
//! the WebAssembly bundle defines them, for example:
//!
//! ```html
//! <script>
//!   window.TASKBOARD_CONFIG = {
//!     apiUrl: "https://tasks.example.com",
//!     username: "dashboard",
//!     password: "from-your-secret-store"
//!   };
//! </script>
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use std::fmt;

/// Name of the global object the configuration is read from.
pub const CONFIG_GLOBAL: &str = "TASKBOARD_CONFIG";

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Origin of the REST API; empty means same origin.
    #[serde(default)]
    pub api_url: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    5
}

impl ClientConfig {
    pub fn new(
        api_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            username: username.into(),
            password: password.into(),
            page_size: default_page_size(),
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// `Basic base64(username:password)`
    pub fn authorization(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(credentials))
    }

    /// Joins an absolute API path onto the configured origin.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("page_size", &self.page_size)
            .finish()
    }
}
