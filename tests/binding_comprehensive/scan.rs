//! Range scans.

use crate::*;

fn load_users(client: &RavenDbClient, count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| insert_row(client, &format!("{}{}", KEY_PREFIX, i)))
        .collect()
}

#[test]
fn test_scan_returns_limit_rows_in_key_order_projected() {
    let (client, _) = quick_setup();
    let rows = load_users(&client, 5);
    let fields = field_set(&["FIELD0", "FIELD1"]);

    let mut result = Vec::new();
    let status = client.scan(TABLE_NAME, "user1", 3, Some(&fields), &mut result);

    assert_eq!(status, Status::Ok);
    assert_eq!(result.len(), 3);
    for (offset, scanned) in result.iter().enumerate() {
        let expected = &rows[1 + offset];
        assert_eq!(scanned.len(), fields.len());
        for field in &fields {
            assert_eq!(scanned[field], expected[field]);
        }
    }
}

#[test]
fn test_scan_stops_at_end_of_collection() {
    let (client, _) = quick_setup();
    load_users(&client, 5);

    let mut result = Vec::new();
    assert_eq!(client.scan(TABLE_NAME, "user3", 10, None, &mut result), Status::Ok);
    assert_eq!(result.len(), 2);
}

#[test]
fn test_scan_ignores_other_tables() {
    let (client, _) = quick_setup();
    load_users(&client, 3);
    let other: Record = [("FIELD0".to_string(), "o".to_string())].into_iter().collect();
    assert_eq!(client.insert("ZTABLE", "user1", &other), Status::Ok);

    let mut result = Vec::new();
    assert_eq!(client.scan(TABLE_NAME, "user0", 10, None, &mut result), Status::Ok);
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|r| r["FIELD0"] != "o"));
}

#[test]
fn test_scan_with_no_matches_is_error_not_not_found() {
    let (client, _) = quick_setup();
    load_users(&client, 2);

    let mut result = Vec::new();
    assert_eq!(client.scan(TABLE_NAME, "user9", 5, None, &mut result), Status::Error);
    assert!(result.is_empty());

    let mut row = Record::new();
    assert_eq!(client.read(TABLE_NAME, "user9", None, &mut row), Status::NotFound);
}

#[test]
fn test_scan_order_is_lexicographic_on_id() {
    let (client, _) = quick_setup();
    for key in ["user10", "user2", "user1"] {
        insert_row(&client, key);
    }

    let mut result = Vec::new();
    assert_eq!(client.scan(TABLE_NAME, "user1", 3, None, &mut result), Status::Ok);
    let expected: Vec<String> = ["user1", "user10", "user2"]
        .iter()
        .map(|k| deterministic_value(k, "FIELD0"))
        .collect();
    let got: Vec<String> = result.iter().map(|r| r["FIELD0"].clone()).collect();
    assert_eq!(got, expected);
}
