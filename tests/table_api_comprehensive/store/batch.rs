//! Batch Write Tests
//!
//! The 25-item cap and the all-or-nothing validation of one batch call.

use crate::*;
use attrstore::{FakeUsers, MAX_BATCH_ITEMS};

fn bulk_users(count: usize) -> Vec<Item> {
    (0..count).map(|i| profile(&format!("u{:03}", i), "Bulk")).collect()
}

#[test]
fn test_batch_at_the_cap_writes_everything() {
    let (_transport, store) = create_store();
    store.batch_insert(&bulk_users(MAX_BATCH_ITEMS)).unwrap();
    assert_eq!(store.count().unwrap(), 25);
}

#[test]
fn test_batch_over_the_cap_writes_nothing() {
    let (_transport, store) = create_store();
    let err = store.batch_insert(&bulk_users(MAX_BATCH_ITEMS + 1)).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_batch_with_keyless_item_writes_nothing() {
    let (_transport, store) = create_store();
    let mut users = bulk_users(3);
    users[1].remove("_id");

    let err = store.batch_insert(&users).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_empty_batch_is_a_no_op() {
    let (_transport, store) = create_store();
    store.batch_insert(&[]).unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_generated_users_batch_cleanly() {
    let (_transport, store) = create_store();
    let users = FakeUsers::seeded(11).users(MAX_BATCH_ITEMS);

    store.batch_insert(&users).unwrap();
    assert_eq!(store.count().unwrap(), 25);

    // Every generated record is fetchable under its own id.
    for user in &users {
        let id = user.get("_id").and_then(Value::as_str).unwrap();
        let fetched = store.fetch_by_key(&key_of(id)).unwrap();
        assert_eq!(&fetched, user);
    }
}
