//! The record interface a benchmark harness drives
//!
//! ## Contract
//!
//! - Every operation reports exactly one [`Status`]; failures never escape
//!   as panics or error values.
//! - `read` and `scan` fill caller-provided buffers on [`Status::Ok`] and
//!   leave them untouched otherwise.
//! - A projection of `None` or an empty set selects every stored field.
//!
//! The harness creates one binding per worker thread, so implementations
//! take `&self` and need only be `Send`.

use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::status::Status;

/// A flat record: field name to value. Field order is irrelevant.
pub type Record = HashMap<String, String>;

/// A projection: the field names a read or scan should return.
pub type FieldSet = HashSet<String>;

/// Database binding driven by the benchmark harness.
///
/// # Example
///
/// ```ignore
/// let mut row = Record::new();
/// match db.read("usertable", "user42", None, &mut row) {
///     Status::Ok => println!("{} fields", row.len()),
///     Status::NotFound => println!("missing"),
///     Status::Error => println!("failed"),
/// }
/// ```
pub trait Db: Send {
    /// Prepare the binding for use. Called once per instance before any
    /// operation.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Release per-instance resources. Called once after the last operation.
    fn cleanup(&mut self) -> Result<()> {
        Ok(())
    }

    /// Read one record, restricted to `fields` when given.
    fn read(&self, table: &str, key: &str, fields: Option<&FieldSet>, result: &mut Record)
        -> Status;

    /// Read up to `record_count` records in key order starting at `start_key`.
    fn scan(
        &self,
        table: &str,
        start_key: &str,
        record_count: usize,
        fields: Option<&FieldSet>,
        result: &mut Vec<Record>,
    ) -> Status;

    /// Update the record stored under `key`.
    fn update(&self, table: &str, key: &str, values: &Record) -> Status;

    /// Insert a record under `key`.
    fn insert(&self, table: &str, key: &str, values: &Record) -> Status;

    /// Delete the record stored under `key`.
    fn delete(&self, table: &str, key: &str) -> Status;
}
