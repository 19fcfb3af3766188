//! Record <-> document conversion
//!
//! ## Encoding
//!
//! Every record field becomes a top-level JSON string. The document also
//! gets an `@metadata` object whose `@collection` is the table, which is
//! what lets a collection query find it later. A record field named
//! `@metadata` is overwritten.
//!
//! ## Decoding
//!
//! `@metadata` is always dropped. With a non-empty projection only the
//! listed fields are kept. `null` values are dropped, so an explicit null
//! reads the same as a missing field. Strings are copied as they are; any
//! other JSON value is copied as its compact JSON text. That includes objects
//! and arrays, which read back as e.g. `{"a":[1,2]}` and never as an empty
//! string. The binding itself only ever writes strings.

use ravendb_store::{metadata, Document};
use serde_json::{Map, Value};
use ycsb_core::{FieldSet, Record};

/// Encode `record` as a document in collection `table`.
pub fn encode(record: &Record, table: &str) -> Document {
    let mut document: Document = record
        .iter()
        .map(|(field, value)| (field.clone(), Value::String(value.clone())))
        .collect();

    let mut meta = Map::new();
    meta.insert(
        metadata::COLLECTION.to_string(),
        Value::String(table.to_string()),
    );
    document.insert(metadata::KEY.to_string(), Value::Object(meta));
    document
}

/// Decode `document` into a record, keeping only `fields` when non-empty.
pub fn decode(document: &Document, fields: Option<&FieldSet>) -> Record {
    let projection = fields.filter(|f| !f.is_empty());
    let mut record = Record::with_capacity(projection.map_or(document.len(), |f| f.len()));

    for (name, value) in document {
        if name == metadata::KEY {
            continue;
        }
        if let Some(projection) = projection {
            if !projection.contains(name) {
                continue;
            }
        }
        if let Some(text) = as_text(value) {
            record.insert(name.clone(), text);
        }
    }
    record
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
