//! RavenDbClient: record operations as document commands
//!
//! ## Design
//!
//! The client is a stateless translator over a shared [`StoreHandle`]. Each
//! operation computes the document id, builds one command, executes it and
//! interprets the single response. Nothing is cached and nothing is retried.
//!
//! ## Thread Safety
//!
//! `Clone + Send + Sync`. Clones share the store connection; each clone is
//! a lease that keeps it open until it is dropped or [`release`]d.
//!
//! [`release`]: RavenDbClient::release

use ravendb_store::{Command, Document, Output, StoreHandle};
use tracing::{debug, trace};
use ycsb_core::{FieldSet, Record};

use crate::codec::{decode, encode};
use crate::document_id::document_id;
use crate::error::{Error, Result};
use crate::range::collection_range_query;

/// Benchmark binding for RavenDB.
///
/// # Example
///
/// ```ignore
/// let client = RavenDbClient::new(handle.clone());
/// client.insert_record("usertable", "user1", &values)?;
/// let row = client.read_record("usertable", "user1", None)?;
/// ```
#[derive(Clone, Debug)]
pub struct RavenDbClient {
    store: Option<StoreHandle>,
}

impl RavenDbClient {
    /// Create a client on a lease of `store`.
    pub fn new(store: StoreHandle) -> Self {
        Self { store: Some(store) }
    }

    /// The store lease this client holds, `None` once released.
    pub fn store(&self) -> Option<&StoreHandle> {
        self.store.as_ref()
    }

    /// Give up this client's lease on the store.
    ///
    /// The store closes when the last lease goes. Afterwards every operation
    /// fails with [`Error::Released`]. Releasing twice is a no-op.
    pub fn release(&mut self) {
        if let Some(store) = self.store.take() {
            let remaining = store.leases() - 1;
            drop(store);
            debug!(target: "ravendb::binding", remaining, "Store lease released");
        }
    }

    fn handle(&self) -> Result<&StoreHandle> {
        self.store.as_ref().ok_or(Error::Released)
    }

    /// Read the record under `key`, restricted to `fields` when non-empty.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no document exists at the id; [`Error::Store`]
    /// on any store failure.
    pub fn read_record(&self, table: &str, key: &str, fields: Option<&FieldSet>) -> Result<Record> {
        let id = document_id(table, key);
        trace!(target: "ravendb::binding", %id, "read");

        let command = Command::GetDocument { id: id.clone() };
        let documents = match self.handle()?.execute(command)? {
            Output::Documents(documents) => documents,
            other => return Err(unexpected("GetDocument", &other)),
        };

        match documents.first() {
            Some(document) => Ok(decode(document, fields)),
            None => Err(Error::NotFound { id }),
        }
    }

    /// Read up to `record_count` records of `table` starting at `start_key`,
    /// in document id order.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyResult`] if the range holds no documents;
    /// [`Error::Store`] on any store failure.
    pub fn scan_records(
        &self,
        table: &str,
        start_key: &str,
        record_count: usize,
        fields: Option<&FieldSet>,
    ) -> Result<Vec<Record>> {
        let start_id = document_id(table, start_key);
        trace!(target: "ravendb::binding", %start_id, record_count, "scan");

        let query = collection_range_query(table, &start_id, record_count);
        let documents = match self.handle()?.execute(Command::Query(query))? {
            Output::QueryResults(documents) => documents,
            other => return Err(unexpected("Query", &other)),
        };

        if documents.is_empty() {
            return Err(Error::EmptyResult {
                collection: table.to_string(),
                start_id,
            });
        }

        Ok(documents
            .iter()
            .map(|document| decode(document, fields))
            .collect())
    }

    /// Store `values` under `key`, replacing any existing document.
    ///
    /// # Errors
    ///
    /// [`Error::Store`] on any store failure.
    pub fn insert_record(&self, table: &str, key: &str, values: &Record) -> Result<()> {
        let id = document_id(table, key);
        trace!(target: "ravendb::binding", %id, fields = values.len(), "put");
        self.put(id, encode(values, table))
    }

    /// Replace the record under `key` with `values`.
    ///
    /// This is a full overwrite, identical to [`insert_record`]: stored
    /// fields missing from `values` are dropped.
    ///
    /// [`insert_record`]: RavenDbClient::insert_record
    pub fn update_record(&self, table: &str, key: &str, values: &Record) -> Result<()> {
        self.insert_record(table, key, values)
    }

    /// Delete the record under `key`. Deleting a missing record succeeds.
    ///
    /// # Errors
    ///
    /// [`Error::Store`] on any store failure.
    pub fn delete_record(&self, table: &str, key: &str) -> Result<()> {
        let id = document_id(table, key);
        trace!(target: "ravendb::binding", %id, "delete");
        match self.handle()?.execute(Command::DeleteDocument { id })? {
            Output::Ack => Ok(()),
            other => Err(unexpected("DeleteDocument", &other)),
        }
    }

    fn put(&self, id: String, document: Document) -> Result<()> {
        match self.handle()?.execute(Command::PutDocument { id, document })? {
            Output::Ack => Ok(()),
            other => Err(unexpected("PutDocument", &other)),
        }
    }
}

fn unexpected(command: &'static str, output: &Output) -> Error {
    Error::UnexpectedOutput {
        command,
        output: output.name(),
    }
}
