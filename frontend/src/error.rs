use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed request: {0}")]
    Request(#[from] http::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("dashboard configuration `{0}` is not defined")]
    Missing(&'static str),

    #[error("invalid dashboard configuration: {0}")]
    Invalid(String),
}
