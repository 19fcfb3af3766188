//! InMemoryDocumentStore: the document store contract without a server
//!
//! ## Design
//!
//! Documents live in a `BTreeMap` keyed by id behind a `parking_lot::RwLock`,
//! so a collection range query is a range walk in id order followed by a
//! collection filter. Collection names match case-insensitively, ids compare
//! ordinally.
//!
//! Document ids are case-sensitive here: `users/A` and `users/a` are two
//! documents, where a RavenDB server would treat them as one.
//!
//! Like the server, the store stamps `@metadata.@id` on every document it
//! keeps and files documents without a collection tag under `@empty`.
//!
//! ## Thread Safety
//!
//! `Send + Sync`; reads share the lock, writes take it exclusively.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::trace;

use crate::command::{Command, Document};
use crate::error::{Result, StoreError};
use crate::metadata;
use crate::output::Output;
use crate::query::IndexQuery;
use crate::rql::parse_collection_range;
use crate::store::DocumentStore;

/// Document store kept entirely in process memory.
///
/// # Example
///
/// ```ignore
/// let store = InMemoryDocumentStore::new();
/// store.execute(Command::PutDocument { id: "users/1".into(), document })?;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<BTreeMap<String, Document>>,
    closed: AtomicBool,
    close_calls: AtomicUsize,
}

impl InMemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Returns true if no documents are stored.
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    /// The stored document for `id`, metadata included.
    pub fn raw_document(&self, id: &str) -> Option<Document> {
        self.documents.read().get(id).cloned()
    }

    /// How many times [`DocumentStore::close`] has been called.
    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }

    /// Returns true once the store has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn put(&self, id: String, mut document: Document) {
        let meta = document
            .entry(metadata::KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !meta.is_object() {
            *meta = Value::Object(Map::new());
        }
        if let Value::Object(meta) = meta {
            meta.entry(metadata::COLLECTION)
                .or_insert_with(|| Value::String(metadata::EMPTY_COLLECTION.to_string()));
            meta.insert(metadata::ID.to_string(), Value::String(id.clone()));
        }
        self.documents.write().insert(id, document);
    }

    fn query(&self, query: &IndexQuery) -> Result<Vec<Document>> {
        let range = parse_collection_range(query)?;
        let lower = match &range.lower_bound {
            Some(bound) => Bound::Included(bound.clone()),
            None => Bound::Unbounded,
        };
        let limit = query.page_size.unwrap_or(usize::MAX);

        let documents = self.documents.read();
        let results = documents
            .range((lower, Bound::Unbounded))
            .map(|(_, doc)| doc)
            .filter(|doc| {
                collection_of(doc)
                    .map(|c| c.eq_ignore_ascii_case(&range.collection))
                    .unwrap_or(false)
            })
            .take(limit)
            .cloned()
            .collect();
        Ok(results)
    }
}

fn collection_of(document: &Document) -> Option<&str> {
    document
        .get(metadata::KEY)?
        .get(metadata::COLLECTION)?
        .as_str()
}

impl DocumentStore for InMemoryDocumentStore {
    fn execute(&self, command: Command) -> Result<Output> {
        if self.is_closed() {
            return Err(StoreError::Closed);
        }
        trace!(target: "ravendb::store", command = command.name(), "in-memory execute");
        match command {
            Command::GetDocument { id } => {
                let found = self.documents.read().get(&id).cloned();
                Ok(Output::Documents(found.into_iter().collect()))
            }
            Command::PutDocument { id, document } => {
                self.put(id, document);
                Ok(Output::Ack)
            }
            Command::DeleteDocument { id } => {
                self.documents.write().remove(&id);
                Ok(Output::Ack)
            }
            Command::Query(query) => Ok(Output::QueryResults(self.query(&query)?)),
        }
    }

    fn close(&self) -> Result<()> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
