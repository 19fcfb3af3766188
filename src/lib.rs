//! ycsb-ravendb - benchmark binding for the RavenDB document store
//!
//! Drives RavenDB through the five harness record operations (read, scan,
//! insert, update, delete). Records map to JSON documents with id
//! `table/key` in collection `table`; scans become id-bounded collection
//! queries.
//!
//! # Quick Start
//!
//! ```ignore
//! use ycsb_ravendb::{open_store, Db, Properties, RavenDbClient, Record, Status};
//!
//! let props = Properties::parse("ravendb.url=http://localhost:8080\nravendb.database=ycsb");
//! let handle = open_store(&props)?;
//!
//! let client = RavenDbClient::new(handle.clone());
//! let mut values = Record::new();
//! values.insert("FIELD0".into(), "hello".into());
//! assert_eq!(client.insert("usertable", "user1", &values), Status::Ok);
//! ```
//!
//! # Architecture
//!
//! - `ycsb-core`: the harness interface ([`Db`], [`Status`], [`Properties`])
//! - `ravendb-store`: commands, HTTP and in-memory stores, the shared handle
//! - `ravendb-binding`: the translation from records to documents

pub use ravendb_binding::*;
pub use ravendb_store::{
    metadata, Command, Document, DocumentStore, HttpDocumentStore, InMemoryDocumentStore,
    IndexQuery, Output, StoreError,
};
pub use ycsb_core::{DbError, Properties};
