//! Harness entry points.
//!
//! Every failure is logged here and folded into a [`Status`]; nothing
//! reaches the harness as an error value.

use tracing::{debug, warn};
use ycsb_core::{Db, FieldSet, Record, Result, Status};

use crate::client::RavenDbClient;
use crate::error::Error;

fn report(op: &'static str, table: &str, key: &str, error: Error) -> Status {
    match &error {
        Error::NotFound { .. } => {
            debug!(target: "ravendb::binding", op, table, key, "Record not found")
        }
        _ => warn!(
            target: "ravendb::binding",
            op,
            table,
            key,
            error = %error,
            "Operation failed"
        ),
    }
    error.status()
}

impl Db for RavenDbClient {
    /// Drops this worker's store lease; the last one closes the store.
    fn cleanup(&mut self) -> Result<()> {
        self.release();
        Ok(())
    }

    fn read(
        &self,
        table: &str,
        key: &str,
        fields: Option<&FieldSet>,
        result: &mut Record,
    ) -> Status {
        match self.read_record(table, key, fields) {
            Ok(record) => {
                result.extend(record);
                Status::Ok
            }
            Err(e) => report("read", table, key, e),
        }
    }

    fn scan(
        &self,
        table: &str,
        start_key: &str,
        record_count: usize,
        fields: Option<&FieldSet>,
        result: &mut Vec<Record>,
    ) -> Status {
        match self.scan_records(table, start_key, record_count, fields) {
            Ok(records) => {
                result.extend(records);
                Status::Ok
            }
            Err(e) => report("scan", table, start_key, e),
        }
    }

    fn update(&self, table: &str, key: &str, values: &Record) -> Status {
        match self.update_record(table, key, values) {
            Ok(()) => Status::Ok,
            Err(e) => report("update", table, key, e),
        }
    }

    fn insert(&self, table: &str, key: &str, values: &Record) -> Status {
        match self.insert_record(table, key, values) {
            Ok(()) => Status::Ok,
            Err(e) => report("insert", table, key, e),
        }
    }

    fn delete(&self, table: &str, key: &str) -> Status {
        match self.delete_record(table, key) {
            Ok(()) => Status::Ok,
            Err(e) => report("delete", table, key, e),
        }
    }
}
