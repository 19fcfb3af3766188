//! Output enum for command results.
//!
//! Each [`Command`](crate::Command) variant maps to exactly one `Output`
//! variant; callers treat any other variant as a protocol violation.

use serde::{Deserialize, Serialize};

use crate::command::Document;

/// Successful command results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Documents returned by a point fetch (empty when the id is unknown)
    Documents(Vec<Document>),

    /// Write or delete accepted
    Ack,

    /// Documents matched by a query, in the store's order
    QueryResults(Vec<Document>),
}

impl Output {
    /// Variant name, used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Output::Documents(_) => "Documents",
            Output::Ack => "Ack",
            Output::QueryResults(_) => "QueryResults",
        }
    }
}
