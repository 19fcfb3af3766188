//! # RavenDB Store
//!
//! Client side of the RavenDB document store, reduced to the commands a
//! record-oriented benchmark binding needs.
//!
//! - [`Command`]/[`Output`] - the command contract (point fetch, point put,
//!   point delete, collection query)
//! - [`DocumentStore`] - anything that executes commands
//! - [`HttpDocumentStore`] - RavenDB over its HTTP API
//! - [`InMemoryDocumentStore`] - same contract, kept in process
//! - [`StoreHandle`] - a shared, reference-counted connection
//!
//! ## Example
//!
//! ```text
//! use ravendb_store::{Command, StoreConfig, StoreHandle};
//!
//! let handle = StoreHandle::open(&StoreConfig::default())?;
//! let output = handle.execute(Command::GetDocument { id: "users/1".into() })?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
mod config;
mod error;
mod handle;
mod http;
mod memory;
pub mod metadata;
mod output;
mod query;
mod rql;
mod store;

pub use command::{Command, Document};
pub use config::{StoreConfig, CONFIG_FILE_NAME, DEFAULT_DATABASE, DEFAULT_URL};
pub use error::{Result, StoreError};
pub use handle::StoreHandle;
pub use http::HttpDocumentStore;
pub use memory::InMemoryDocumentStore;
pub use output::Output;
pub use query::IndexQuery;
pub use store::DocumentStore;
