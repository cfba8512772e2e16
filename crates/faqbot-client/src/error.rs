//! Error types for faqbot-client

use thiserror::Error;

/// Result type alias using faqbot-client Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the FAQ backend
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend returned a non-success status
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Response was well-formed JSON but not the expected shape
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create an API error from a status code and response body
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Check if this error came from the transport or the server rather than
    /// from local misconfiguration
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Api { .. } | Error::Json(_) | Error::UnexpectedResponse(_)
        )
    }
}
