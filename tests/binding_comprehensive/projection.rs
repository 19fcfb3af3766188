//! Field projection on read and scan.

use crate::*;
use proptest::prelude::*;

#[test]
fn test_read_single_field() {
    let (client, _) = quick_setup();
    let row = insert_row(&client, "user0");
    let fields = field_set(&["FIELD0"]);

    let mut result = Record::new();
    assert_eq!(client.read(TABLE_NAME, "user0", Some(&fields), &mut result), Status::Ok);
    assert_eq!(result.len(), 1);
    assert_eq!(result["FIELD0"], row["FIELD0"]);
}

#[test]
fn test_read_all_fields_by_name() {
    let (client, _) = quick_setup();
    let row = insert_row(&client, "user0");
    let fields = field_set(&["FIELD0", "FIELD1", "FIELD2"]);

    let mut result = Record::new();
    assert_eq!(client.read(TABLE_NAME, "user0", Some(&fields), &mut result), Status::Ok);
    assert_eq!(result, row);
}

#[test]
fn test_projection_of_unknown_field_returns_nothing_for_it() {
    let (client, _) = quick_setup();
    insert_row(&client, "user0");
    let fields = field_set(&["FIELD0", "NOPE"]);

    let mut result = Record::new();
    assert_eq!(client.read(TABLE_NAME, "user0", Some(&fields), &mut result), Status::Ok);
    assert_eq!(result.len(), 1);
}

#[test]
fn test_metadata_hidden_even_when_requested() {
    let (client, _) = quick_setup();
    insert_row(&client, "user0");
    let fields = field_set(&["@metadata", "FIELD1"]);

    let mut result = Record::new();
    assert_eq!(client.read(TABLE_NAME, "user0", Some(&fields), &mut result), Status::Ok);
    assert!(!result.contains_key("@metadata"));
    assert_eq!(result.len(), 1);

    let mut rows = Vec::new();
    assert_eq!(client.scan(TABLE_NAME, "user0", 1, Some(&fields), &mut rows), Status::Ok);
    assert!(!rows[0].contains_key("@metadata"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_insert_then_read_round_trips(
        values in prop::collection::hash_map("[A-Za-z][A-Za-z0-9_]{0,9}", ".{0,32}", 1..10),
        key in "[a-z0-9]{1,12}",
    ) {
        let (client, _) = quick_setup();
        prop_assert_eq!(client.insert(TABLE_NAME, &key, &values), Status::Ok);

        let mut result = Record::new();
        prop_assert_eq!(client.read(TABLE_NAME, &key, None, &mut result), Status::Ok);
        prop_assert_eq!(result, values);
    }

    #[test]
    fn prop_projection_size_matches(
        values in prop::collection::hash_map("[A-Za-z][A-Za-z0-9_]{0,9}", "[a-z]{1,8}", 1..10),
        take in 1usize..10,
    ) {
        let (client, _) = quick_setup();
        prop_assert_eq!(client.insert(TABLE_NAME, "k", &values), Status::Ok);

        let fields: FieldSet = values.keys().take(take).cloned().collect();
        let mut result = Record::new();
        prop_assert_eq!(client.read(TABLE_NAME, "k", Some(&fields), &mut result), Status::Ok);
        prop_assert_eq!(result.len(), fields.len());
    }
}
