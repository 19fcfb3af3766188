//! The document store abstraction.

use std::sync::Arc;

use crate::command::Command;
use crate::error::Result;
use crate::output::Output;

/// Something that executes [`Command`]s against a document store.
///
/// Implementations are shared by every worker of a benchmark run, so they
/// must be `Send + Sync` and handle concurrent `execute` calls on their own.
pub trait DocumentStore: Send + Sync {
    /// Execute one command as a single request/response round trip.
    fn execute(&self, command: Command) -> Result<Output>;

    /// Release the connection. Called once, when the last
    /// [`StoreHandle`](crate::StoreHandle) lease is dropped.
    fn close(&self) -> Result<()> {
        Ok(())
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    fn execute(&self, command: Command) -> Result<Output> {
        (**self).execute(command)
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }
}
