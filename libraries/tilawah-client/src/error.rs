//! Error types for the HTTP clients.

use thiserror::Error;
use tilawah_core::TilawahError;

/// Errors that can occur when talking to a remote API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Host offline or unreachable
    #[error("API unreachable: {0}")]
    Unreachable(String),
}

impl From<url::ParseError> for ClientError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}

impl From<ClientError> for TilawahError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::InvalidUrl(msg) => TilawahError::invalid_input(msg),
            other => TilawahError::network(other.to_string()),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
