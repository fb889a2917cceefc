//! Error types and result definitions for the relayctl crate.
//! Failures here are typed so that ignoring them at a call site is a visible choice.

use thiserror::Error;

/// Represents all possible errors that can occur when talking to a relay module.
#[derive(Error, Debug, Clone)]
pub enum RelayError {
    /// Transport-level failure (connection refused, DNS, reset, etc.)
    #[error("HTTP error: {0}")]
    Http(String),

    /// The status endpoint answered with a non-success HTTP code
    #[error("Device returned HTTP status {0}")]
    Status(u16),

    /// The status payload was not valid JSON or lacked a required field
    #[error("JSON error: {0}")]
    Json(String),
}

/// A specialized Result type for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::Json(err.to_string())
    }
}
