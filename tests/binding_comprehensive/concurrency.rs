//! Workers sharing one store handle.

use std::sync::{Arc, Barrier};
use std::thread;

use crate::*;

#[test]
fn test_workers_on_disjoint_keys_do_not_interfere() {
    init_tracing();
    let store = Arc::new(InMemoryDocumentStore::new());
    let handle = StoreHandle::new(store.clone());

    let num_workers = 8;
    let ops_per_worker = 50;
    let barrier = Arc::new(Barrier::new(num_workers));

    let workers: Vec<_> = (0..num_workers)
        .map(|worker| {
            let client = RavenDbClient::new(handle.clone());
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..ops_per_worker {
                    let key = format!("w{}-{}", worker, i);
                    let row = insert_row(&client, &key);
                    let mut result = Record::new();
                    assert_eq!(client.read(TABLE_NAME, &key, None, &mut result), Status::Ok);
                    assert_eq!(result, row);
                }
            })
        })
        .collect();

    for w in workers {
        w.join().unwrap();
    }
    assert_eq!(store.len(), num_workers * ops_per_worker);
}

#[test]
fn test_concurrent_writes_same_key_last_write_wins() {
    init_tracing();
    let store = Arc::new(InMemoryDocumentStore::new());
    let handle = StoreHandle::new(store.clone());

    let num_workers = 4;
    let barrier = Arc::new(Barrier::new(num_workers));
    let workers: Vec<_> = (0..num_workers)
        .map(|worker| {
            let client = RavenDbClient::new(handle.clone());
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..25 {
                    let values: Record = [
                        ("worker".to_string(), worker.to_string()),
                        ("seq".to_string(), i.to_string()),
                    ]
                    .into_iter()
                    .collect();
                    assert_eq!(client.update(TABLE_NAME, "shared", &values), Status::Ok);
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }

    let client = RavenDbClient::new(handle);
    let mut result = Record::new();
    assert_eq!(client.read(TABLE_NAME, "shared", None, &mut result), Status::Ok);
    assert_eq!(result.len(), 2, "a whole document from one writer survives");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_store_closes_once_after_last_worker_cleanup() {
    init_tracing();
    let store = Arc::new(InMemoryDocumentStore::new());
    let handle = StoreHandle::new(store.clone());

    let clients: Vec<RavenDbClient> = (0..4)
        .map(|_| RavenDbClient::new(handle.clone()))
        .collect();
    drop(handle);
    assert_eq!(clients[0].store().map(StoreHandle::leases), Some(4));

    let workers: Vec<_> = clients
        .into_iter()
        .map(|mut client| {
            thread::spawn(move || {
                insert_row(&client, "user0");
                client.cleanup().unwrap();
                client
            })
        })
        .collect();
    let finished: Vec<RavenDbClient> = workers.into_iter().map(|w| w.join().unwrap()).collect();

    // Every client is still alive; the close came from cleanup.
    assert_eq!(finished.len(), 4);
    assert_eq!(store.close_calls(), 1);
    assert!(store.is_closed());
}
