//! Operation result status

use std::fmt;

/// Result status of a single harness operation.
///
/// The harness accounts each operation by its status; a binding reports
/// exactly one status per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation completed.
    Ok,
    /// The addressed record does not exist.
    NotFound,
    /// The operation failed; the harness counts it as a failure.
    Error,
}

impl Status {
    /// Returns true for [`Status::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }

    /// Stable upper-case name used in harness reports.
    pub fn name(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::NotFound => "NOT_FOUND",
            Status::Error => "ERROR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
