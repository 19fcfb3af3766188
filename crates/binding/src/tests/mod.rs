//! Translator tests against in-process stores.


use std::sync::Arc;

use ravendb_store::{InMemoryDocumentStore, StoreHandle};
use ycsb_core::{FieldSet, Record};

use crate::RavenDbClient;

pub(crate) fn setup() -> (RavenDbClient, Arc<InMemoryDocumentStore>) {
    let store = Arc::new(InMemoryDocumentStore::new());
    let client = RavenDbClient::new(StoreHandle::new(store.clone()));
    (client, store)
}

pub(crate) fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub(crate) fn fields(names: &[&str]) -> FieldSet {
    names.iter().map(|n| n.to_string()).collect()
}
