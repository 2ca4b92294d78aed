//! Error types for adapters.

use thiserror::Error;

/// Errors that can occur when collecting status from Solr.
///
/// The `Display` text of each variant is the message reported on the
/// status line when the check is cut short.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Connection failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("Request timed out")]
    Timeout,

    /// Server answered with something other than 200.
    #[error("Unexpected status code. HTTP {0} returned.")]
    UnexpectedStatus(u16),

    /// Failed to parse response.
    #[error("Unexpected solr response. {0}")]
    Parse(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AdapterError::Timeout
        } else if err.is_connect() {
            AdapterError::Connection(err.to_string())
        } else {
            AdapterError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        AdapterError::Parse(err.to_string())
    }
}
