//! Binding Comprehensive Test Suite
//!
//! Exercises the binding through the harness [`Db`] interface against the
//! in-memory document store.
//!
//! ## Modules
//!
//! - `crud`: insert, read, update, delete
//! - `scan`: ordered range scans and their limits
//! - `projection`: field selection and metadata hiding
//! - `concurrency`: workers sharing one store handle
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test binding_comprehensive
//! cargo test --test binding_comprehensive scan::
//! ```

use std::sync::Arc;

use ycsb_ravendb::{
    Db, FieldSet, InMemoryDocumentStore, RavenDbClient, Record, Status, StoreHandle,
};

mod concurrency;
mod crud;
mod projection;
mod scan;

pub const TABLE_NAME: &str = "USERTABLE";
pub const FIELD_PREFIX: &str = "FIELD";
pub const KEY_PREFIX: &str = "user";
const FIELD_LENGTH: usize = 32;

/// Route binding logs to the test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A client on a fresh in-memory store, plus the store for inspection.
pub fn quick_setup() -> (RavenDbClient, Arc<InMemoryDocumentStore>) {
    init_tracing();
    let store = Arc::new(InMemoryDocumentStore::new());
    let client = RavenDbClient::new(StoreHandle::new(store.clone()));
    (client, store)
}

/// Deterministic field value derived from key and field name, padded to a
/// fixed length.
pub fn deterministic_value(key: &str, field: &str) -> String {
    let mut value = format!("{}:{}", key, field);
    let mut round = 0u64;
    while value.len() < FIELD_LENGTH {
        let digest = value
            .bytes()
            .fold(round.wrapping_add(1469598103934665603), |h, b| {
                (h ^ b as u64).wrapping_mul(1099511628211)
            });
        value.push(':');
        value.push_str(&digest.to_string());
        round += 1;
    }
    value.truncate(FIELD_LENGTH);
    value
}

/// Insert a three-field row under `key` and return what was written.
pub fn insert_row(client: &RavenDbClient, key: &str) -> Record {
    let row: Record = (0..3)
        .map(|i| {
            let field = format!("{}{}", FIELD_PREFIX, i);
            let value = deterministic_value(key, &field);
            (field, value)
        })
        .collect();
    assert_eq!(client.insert(TABLE_NAME, key, &row), Status::Ok);
    row
}

pub fn field_set(names: &[&str]) -> FieldSet {
    names.iter().map(|n| n.to_string()).collect()
}
