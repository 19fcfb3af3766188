//! StoreHandle: one connection shared by every worker
//!
//! A handle is created once during harness setup and cloned into each
//! binding instance. Every clone is a lease on the same underlying
//! [`DocumentStore`]; the store is closed exactly once, when the last lease
//! is dropped.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::command::Command;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::http::HttpDocumentStore;
use crate::output::Output;
use crate::store::DocumentStore;

struct Shared {
    store: Box<dyn DocumentStore>,
    description: String,
}

impl Drop for Shared {
    fn drop(&mut self) {
        match self.store.close() {
            Ok(()) => info!(
                target: "ravendb::store",
                store = %self.description,
                "Document store closed"
            ),
            Err(e) => warn!(
                target: "ravendb::store",
                store = %self.description,
                error = %e,
                "Could not close document store"
            ),
        }
    }
}

/// Shared, reference-counted access to a document store.
///
/// `Clone` hands out another lease; dropping the last lease closes the
/// store. `StoreHandle` is `Send + Sync`.
///
/// # Example
///
/// ```ignore
/// let handle = StoreHandle::open(&StoreConfig::new("http://localhost:8080", "ycsb"))?;
/// let worker_a = handle.clone();
/// let worker_b = handle.clone();
/// drop(handle);
/// // still open: worker_a and worker_b hold leases
/// ```
#[derive(Clone)]
pub struct StoreHandle {
    shared: Arc<Shared>,
}

impl StoreHandle {
    /// Connect to RavenDB over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the client
    /// certificate cannot be loaded.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let store = HttpDocumentStore::connect(config)?;
        let description = format!("{} [{}]", config.database, config.urls.join(","));
        info!(
            target: "ravendb::store",
            store = %description,
            "RavenDB client connection created"
        );
        Ok(Self::with_description(store, description))
    }

    /// Wrap an existing store.
    pub fn new<S: DocumentStore + 'static>(store: S) -> Self {
        Self::with_description(store, std::any::type_name::<S>().to_string())
    }

    fn with_description<S: DocumentStore + 'static>(store: S, description: String) -> Self {
        Self {
            shared: Arc::new(Shared {
                store: Box::new(store),
                description,
            }),
        }
    }

    /// Execute a command on the shared store.
    pub fn execute(&self, command: Command) -> Result<Output> {
        debug!(target: "ravendb::store", command = command.name(), "execute");
        self.shared.store.execute(command)
    }

    /// Number of live leases, this one included.
    pub fn leases(&self) -> usize {
        Arc::strong_count(&self.shared)
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle")
            .field("store", &self.shared.description)
            .field("leases", &self.leases())
            .finish()
    }
}
