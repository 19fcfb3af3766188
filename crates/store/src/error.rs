//! Error types for document store commands.

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised while talking to a document store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never produced a response (connect, I/O, timeout)
    #[error("transport error talking to {url}: {reason}")]
    Transport {
        /// Node the request was sent to
        url: String,
        /// Underlying failure
        reason: String,
    },

    /// The server answered with an unexpected HTTP status
    #[error("{command} failed with status {status}: {message}")]
    Status {
        /// Command name
        command: &'static str,
        /// HTTP status code
        status: u16,
        /// Server-provided message, if any
        message: String,
    },

    /// The response could not be decoded
    #[error("protocol error: {reason}")]
    Protocol {
        /// What was malformed
        reason: String,
    },

    /// The store refused the command
    #[error("command rejected: {reason}")]
    Rejected {
        /// Why it was refused
        reason: String,
    },

    /// Connection settings are invalid
    #[error("invalid store configuration: {reason}")]
    Config {
        /// What is wrong
        reason: String,
    },

    /// The client certificate could not be loaded
    #[error("certificate error: {reason}")]
    Certificate {
        /// What went wrong
        reason: String,
    },

    /// The store has been closed
    #[error("document store is closed")]
    Closed,
}

impl StoreError {
    pub(crate) fn protocol(reason: impl Into<String>) -> Self {
        StoreError::Protocol {
            reason: reason.into(),
        }
    }

    pub(crate) fn config(reason: impl Into<String>) -> Self {
        StoreError::Config {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::protocol(format!("invalid JSON: {}", e))
    }
}
