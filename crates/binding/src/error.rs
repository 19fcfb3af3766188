//! Binding errors and their harness status.

use ravendb_store::StoreError;
use thiserror::Error;
use ycsb_core::Status;

/// Result type alias for binding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a record operation did not succeed
#[derive(Debug, Error)]
pub enum Error {
    /// A read addressed a document that does not exist
    #[error("document not found: {id}")]
    NotFound {
        /// Document id
        id: String,
    },

    /// A scan matched no documents
    #[error("no documents in collection '{collection}' at or after '{start_id}'")]
    EmptyResult {
        /// Collection scanned
        collection: String,
        /// First document id of the range
        start_id: String,
    },

    /// The client gave up its store lease in `cleanup`
    #[error("client has released its store connection")]
    Released,

    /// The store could not be reached or refused the command
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The store answered with the wrong kind of output
    #[error("{command} returned unexpected output {output}")]
    UnexpectedOutput {
        /// Command name
        command: &'static str,
        /// Output variant received
        output: &'static str,
    },
}

impl Error {
    /// Harness status for this failure.
    ///
    /// Only a missing document on read is `NotFound`; an empty scan is an
    /// `Error`, as is every store failure.
    pub fn status(&self) -> Status {
        match self {
            Error::NotFound { .. } => Status::NotFound,
            Error::EmptyResult { .. }
            | Error::Released
            | Error::Store(_)
            | Error::UnexpectedOutput { .. } => Status::Error,
        }
    }
}
