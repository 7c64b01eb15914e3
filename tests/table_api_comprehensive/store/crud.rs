//! Basic Facade Operations Tests
//!
//! Fetch, insert, update, delete, query, scan, and count through the facade.

use crate::*;
use attrstore::StoreError;

// =============================================================================
// FETCH / INSERT
// =============================================================================

#[test]
fn test_insert_and_fetch_roundtrip() {
    let (_transport, store) = create_store();
    let record = profile("u1", "Ana");

    store.insert(&record).unwrap();
    let fetched = store.fetch_by_key(&key_of("u1")).unwrap();
    assert_eq!(fetched, record);
}

#[test]
fn test_fetch_absent_key_is_an_empty_item() {
    let (_transport, store) = create_store();
    let fetched = store.fetch_by_key(&key_of("nobody")).unwrap();
    assert!(fetched.is_empty());
}

#[test]
fn test_insert_overwrites_by_key() {
    let (_transport, store) = create_store();
    store.insert(&profile("u1", "Ana")).unwrap();
    store.insert(&profile("u1", "Anabel")).unwrap();

    assert_eq!(store.count().unwrap(), 1);
    let fetched = store.fetch_by_key(&key_of("u1")).unwrap();
    assert_eq!(fetched.get("Name"), Some(&Value::from("Anabel")));
}

#[test]
fn test_fetch_with_malformed_key_is_a_validation_error() {
    let (_transport, store) = create_store();
    let two_attribute_key = WireItem::from([
        ("_id".to_string(), AttrValue::string("u1")),
        ("Name".to_string(), AttrValue::string("Ana")),
    ]);

    let err = store.fetch_by_key(&two_attribute_key).unwrap_err();
    assert!(err.is_validation());
}

// =============================================================================
// UPDATE
// =============================================================================

#[test]
fn test_update_rewrites_one_attribute_and_returns_the_new_image() {
    let (_transport, store) = create_store();
    store.insert(&profile("u1", "Ana")).unwrap();

    let names = HashMap::from([("#Name".to_string(), "Name".to_string())]);
    let values = WireItem::from([(":Name".to_string(), AttrValue::string("Anabel"))]);
    let updated = store
        .conditional_update(&key_of("u1"), "SET #Name = :Name", &names, &values)
        .unwrap();

    assert_eq!(updated.get("Name"), Some(&Value::from("Anabel")));
    assert_eq!(updated.get("Email"), Some(&Value::from("ana@example.com")));
}

#[test]
fn test_update_absent_key_keeps_the_engine_condition_code() {
    let (_transport, store) = create_store();
    let names = HashMap::from([("#Name".to_string(), "Name".to_string())]);
    let values = WireItem::from([(":Name".to_string(), AttrValue::string("x"))]);

    let err = store
        .conditional_update(&key_of("ghost"), "SET #Name = :Name", &names, &values)
        .unwrap_err();
    assert!(err.is_condition_failed());
    match err {
        StoreError::Transport(inner) => {
            assert_eq!(inner.message, "The conditional request failed");
        }
        other => panic!("expected a transport error, got {:?}", other),
    }
}

// =============================================================================
// DELETE
// =============================================================================

#[test]
fn test_delete_returns_the_removed_record() {
    let (_transport, store) = create_store();
    store.insert(&profile("u1", "Ana")).unwrap();

    let deleted = store.delete(&key_of("u1")).unwrap();
    assert_eq!(deleted.get("Name"), Some(&Value::from("Ana")));
    assert!(store.fetch_by_key(&key_of("u1")).unwrap().is_empty());
}

#[test]
fn test_second_delete_is_a_condition_failure() {
    let (_transport, store) = create_store();
    store.insert(&profile("u1", "Ana")).unwrap();
    store.delete(&key_of("u1")).unwrap();

    let err = store.delete(&key_of("u1")).unwrap_err();
    assert!(err.is_condition_failed());
}

// =============================================================================
// QUERY / SCAN
// =============================================================================

#[test]
fn test_query_returns_plain_items() {
    let (_transport, store) = create_store();
    store.insert(&profile("u1", "Ana")).unwrap();
    store.insert(&profile("u2", "Ben")).unwrap();

    let items = store
        .query_by_key("#id = :_id", &id_names(), &id_values("u1"))
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].get("Name"), Some(&Value::from("Ana")));
}

#[test]
fn test_query_absent_key_is_an_empty_page() {
    let (_transport, store) = create_store();
    let items = store
        .query_by_key("#id = :_id", &id_names(), &id_values("ghost"))
        .unwrap();
    assert!(items.is_empty());
}

#[test]
fn test_scan_projects_requested_attributes() {
    let (_transport, store) = create_store();
    store.insert(&profile("u1", "Ana")).unwrap();

    let names = HashMap::from([
        ("#id".to_string(), "_id".to_string()),
        ("#name".to_string(), "Name".to_string()),
    ]);
    let items = store
        .scan_with_filter("#id = :_id", &names, &id_values("u1"), "#id,#name")
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].len(), 2);
    assert!(items[0].contains_key("_id"));
    assert!(items[0].contains_key("Name"));
    assert!(!items[0].contains_key("Email"));
}

// =============================================================================
// COUNT / COLLECTION HANDLING
// =============================================================================

#[test]
fn test_count_tracks_inserts_and_deletes() {
    let (_transport, store) = create_store();
    assert_eq!(store.count().unwrap(), 0);

    store.insert(&profile("u1", "Ana")).unwrap();
    store.insert(&profile("u2", "Ben")).unwrap();
    assert_eq!(store.count().unwrap(), 2);

    store.delete(&key_of("u1")).unwrap();
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_unknown_collection_surfaces_the_engine_code() {
    let (transport, _store) = create_store();
    let wrong = Collection::new(transport, StoreConfig::new("not-a-collection"));

    let err = wrong.fetch_by_key(&key_of("u1")).unwrap_err();
    match err {
        StoreError::Transport(inner) => {
            assert_eq!(inner.code, attrstore::COLLECTION_NOT_FOUND);
            assert!(inner.message.contains("not-a-collection"));
        }
        other => panic!("expected a transport error, got {:?}", other),
    }
}
