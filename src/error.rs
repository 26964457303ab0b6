//! Errors raised while talking to the backends

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("request failed with status {0}")]
    Status(StatusCode),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Text shown in a panel when a request fails.
pub fn display_error(message: &str) -> String {
    format!("Error: {}", message)
}
