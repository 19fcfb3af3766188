//! Insert, read, update and delete through the harness interface.

use crate::*;

#[test]
fn test_insert_stores_document_with_id_and_collection() {
    let (client, store) = quick_setup();
    let row = insert_row(&client, "user0");

    let raw = store.raw_document("USERTABLE/user0").expect("document stored");
    assert_eq!(raw["@metadata"]["@id"], "USERTABLE/user0");
    assert_eq!(raw["@metadata"]["@collection"], TABLE_NAME);
    for (field, value) in &row {
        assert_eq!(raw[field.as_str()], value.as_str());
    }
}

#[test]
fn test_insert_then_read_returns_all_fields() {
    let (client, _) = quick_setup();
    let row = insert_row(&client, "user0");

    let mut result = Record::new();
    assert_eq!(client.read(TABLE_NAME, "user0", None, &mut result), Status::Ok);
    assert_eq!(result, row);

    let mut result = Record::new();
    let empty = FieldSet::new();
    assert_eq!(client.read(TABLE_NAME, "user0", Some(&empty), &mut result), Status::Ok);
    assert_eq!(result, row);
}

#[test]
fn test_read_missing_key_is_not_found() {
    let (client, _) = quick_setup();
    let mut result = Record::new();
    assert_eq!(client.read(TABLE_NAME, "nobody", None, &mut result), Status::NotFound);
    assert!(result.is_empty());
}

#[test]
fn test_update_overwrites_whole_record() {
    let (client, _) = quick_setup();
    insert_row(&client, "user0");

    let replacement: Record = [
        ("OTHER0".to_string(), "x".to_string()),
        ("OTHER1".to_string(), "y".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(client.update(TABLE_NAME, "user0", &replacement), Status::Ok);

    let mut result = Record::new();
    assert_eq!(client.read(TABLE_NAME, "user0", None, &mut result), Status::Ok);
    assert_eq!(result, replacement);
}

#[test]
fn test_update_missing_key_creates_it() {
    let (client, _) = quick_setup();
    let values: Record = [("FIELD0".to_string(), "v".to_string())].into_iter().collect();
    assert_eq!(client.update(TABLE_NAME, "fresh", &values), Status::Ok);

    let mut result = Record::new();
    assert_eq!(client.read(TABLE_NAME, "fresh", None, &mut result), Status::Ok);
    assert_eq!(result, values);
}

#[test]
fn test_delete_removes_only_that_row() {
    let (client, store) = quick_setup();
    insert_row(&client, "user0");
    insert_row(&client, "user1");
    insert_row(&client, "user2");

    assert_eq!(client.delete(TABLE_NAME, "user1"), Status::Ok);

    assert_eq!(store.len(), 2);
    assert!(store.raw_document("USERTABLE/user1").is_none());
    let mut result = Record::new();
    assert_eq!(client.read(TABLE_NAME, "user1", None, &mut result), Status::NotFound);
    assert_eq!(client.read(TABLE_NAME, "user0", None, &mut result), Status::Ok);
}

#[test]
fn test_delete_missing_key_is_ok() {
    let (client, _) = quick_setup();
    assert_eq!(client.delete(TABLE_NAME, "never-there"), Status::Ok);
}

#[test]
fn test_read_appends_into_existing_buffer() {
    let (client, _) = quick_setup();
    insert_row(&client, "user0");

    let mut result = Record::new();
    result.insert("carried".to_string(), "over".to_string());
    assert_eq!(client.read(TABLE_NAME, "user0", None, &mut result), Status::Ok);
    assert_eq!(result.len(), 4);
    assert_eq!(result["carried"], "over");
}
