//! # RavenDB Binding
//!
//! Drives a RavenDB document store through the harness [`Db`] interface.
//!
//! ## Mapping
//!
//! | Harness | Document store |
//! |---------|----------------|
//! | table | collection (`@metadata.@collection`) |
//! | (table, key) | document id `table/key` |
//! | record | document fields, every value a JSON string |
//! | read | point fetch |
//! | insert / update | point put (full replace) |
//! | delete | point delete |
//! | scan | `from '<table>' where id() >= $startId`, paged to the count |
//!
//! ## Setup
//!
//! ```text
//! use ravendb_binding::{open_store, RavenDbClient};
//!
//! let handle = open_store(&props)?;           // once, during harness setup
//! let client = RavenDbClient::new(handle.clone()); // one per worker
//! ```
//!
//! The store connection closes when the last client has been cleaned up (or
//! dropped) and the setup handle is gone.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;
pub mod codec;
pub mod config;
mod db;
mod document_id;
mod error;
pub mod range;

#[cfg(test)]
mod tests;

pub use client::RavenDbClient;
pub use config::{open_store, store_config};
pub use document_id::document_id;
pub use error::{Error, Result};

pub use ravendb_store::{StoreConfig, StoreHandle};
pub use ycsb_core::{Db, FieldSet, Record, Status};
