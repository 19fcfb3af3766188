//! Harness interface for YCSB-style benchmark bindings
//!
//! This crate defines the surface a benchmark harness drives:
//! - [`Db`]: the five record operations (read, scan, update, insert, delete)
//! - [`Status`]: the result status every operation reports
//! - [`Record`] / [`FieldSet`]: flat field maps and projection sets
//! - [`Properties`]: string-keyed configuration handed to bindings
//!
//! Bindings implement [`Db`] and never let a failure escape as a panic or an
//! error value: every outcome is folded into a [`Status`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod db;
pub mod error;
pub mod properties;
pub mod status;

pub use db::{Db, FieldSet, Record};
pub use error::{DbError, Result};
pub use properties::Properties;
pub use status::Status;
