//! Error types for binding setup
//!
//! Record operations never return these; they report a [`Status`](crate::Status).
//! `DbError` covers the phases around them: reading configuration and
//! bringing a binding up or down.

use std::io;
use thiserror::Error;

/// Result type alias for binding setup
pub type Result<T> = std::result::Result<T, DbError>;

/// Errors raised while configuring or initializing a binding
#[derive(Debug, Error)]
pub enum DbError {
    /// I/O error while reading a configuration source
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A configuration value is missing or malformed
    #[error("Invalid property '{key}': {reason}")]
    InvalidProperty {
        /// Property name
        key: String,
        /// What is wrong with it
        reason: String,
    },

    /// The binding could not be initialized
    #[error("Initialization failed: {0}")]
    Init(String),
}
