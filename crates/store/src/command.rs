//! Command enum defining the document store operations.
//!
//! Commands are self-contained and serializable: every parameter needed to
//! execute one is in its variant, so any [`DocumentStore`](crate::DocumentStore)
//! can run it, whether it talks HTTP or keeps documents in memory.

use serde::{Deserialize, Serialize};

use crate::query::IndexQuery;

/// A JSON document: top-level field name to JSON value.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// A single request to a document store.
///
/// | Command | Output |
/// |---------|--------|
/// | `GetDocument` | `Output::Documents` (zero or one) |
/// | `PutDocument` | `Output::Ack` |
/// | `DeleteDocument` | `Output::Ack` |
/// | `Query` | `Output::QueryResults` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Fetch one document by id.
    /// Returns: `Output::Documents` with zero or one document
    GetDocument {
        /// Document id
        id: String,
    },

    /// Create or fully replace a document.
    /// Returns: `Output::Ack`
    PutDocument {
        /// Document id
        id: String,
        /// Full document body, metadata included
        document: Document,
    },

    /// Delete a document. Deleting a missing id succeeds.
    /// Returns: `Output::Ack`
    DeleteDocument {
        /// Document id
        id: String,
    },

    /// Run a query.
    /// Returns: `Output::QueryResults`
    Query(IndexQuery),
}

impl Command {
    /// Variant name, used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Command::GetDocument { .. } => "GetDocument",
            Command::PutDocument { .. } => "PutDocument",
            Command::DeleteDocument { .. } => "DeleteDocument",
            Command::Query(_) => "Query",
        }
    }
}
