//! Client error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// A list request did not produce a page.
///
/// The underlying cause is carried as-is; callers decide what to show.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection failure, timeout, or non-success HTTP status.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a valid page.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    /// HTTP status of the failed response, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Http(e) => e.status(),
            TransportError::Decode(_) => None,
        }
    }
}

/// The client could not be constructed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP transport: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for list requests.
pub type TransportResult<T> = Result<T, TransportError>;
