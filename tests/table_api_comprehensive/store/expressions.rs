//! Expression Dialect Tests
//!
//! The placeholder grammar the facade passes through: `SET` assignments,
//! equality conditions, and projections, with the engine's own rejections.

use crate::*;
use attrstore::StoreError;

fn engine_message(err: StoreError) -> String {
    match err {
        StoreError::Transport(inner) => inner.message,
        other => panic!("expected a transport error, got {:?}", other),
    }
}

// =============================================================================
// UPDATE EXPRESSIONS
// =============================================================================

#[test]
fn test_update_with_two_assignments() {
    let (_transport, store) = create_store();
    store.insert(&profile("u1", "Ana")).unwrap();

    let names = HashMap::from([
        ("#Name".to_string(), "Name".to_string()),
        ("#Phone".to_string(), "Phone".to_string()),
    ]);
    let values = WireItem::from([
        (":Name".to_string(), AttrValue::string("Anabel")),
        (":Phone".to_string(), AttrValue::string("(555) 555-0100")),
    ]);
    let updated = store
        .conditional_update(
            &key_of("u1"),
            "SET #Name = :Name, #Phone = :Phone",
            &names,
            &values,
        )
        .unwrap();

    assert_eq!(updated.get("Name"), Some(&Value::from("Anabel")));
    assert_eq!(updated.get("Phone"), Some(&Value::from("(555) 555-0100")));
}

#[test]
fn test_update_without_set_prefix_is_a_syntax_error() {
    let (_transport, store) = create_store();
    let err = store
        .conditional_update(&key_of("u1"), "#Name = :Name", &HashMap::new(), &WireItem::new())
        .unwrap_err();
    assert!(engine_message(err).contains("Syntax error"));
}

#[test]
fn test_update_undefined_name_placeholder_names_the_token() {
    let (_transport, store) = create_store();
    let values = WireItem::from([(":Name".to_string(), AttrValue::string("x"))]);
    let err = store
        .conditional_update(&key_of("u1"), "SET #Name = :Name", &HashMap::new(), &values)
        .unwrap_err();
    assert!(engine_message(err).contains("attribute name: #Name"));
}

#[test]
fn test_update_undefined_value_placeholder_names_the_token() {
    let (_transport, store) = create_store();
    let names = HashMap::from([("#Name".to_string(), "Name".to_string())]);
    let err = store
        .conditional_update(&key_of("u1"), "SET #Name = :Name", &names, &WireItem::new())
        .unwrap_err();
    assert!(engine_message(err).contains("attribute value: :Name"));
}

#[test]
fn test_update_cannot_rewrite_the_key() {
    let (_transport, store) = create_store();
    store.insert(&profile("u1", "Ana")).unwrap();

    let names = HashMap::from([("#id".to_string(), "_id".to_string())]);
    let values = WireItem::from([(":id".to_string(), AttrValue::string("u2"))]);
    let err = store
        .conditional_update(&key_of("u1"), "SET #id = :id", &names, &values)
        .unwrap_err();

    assert!(err.is_validation());
    // The record is untouched.
    let fetched = store.fetch_by_key(&key_of("u1")).unwrap();
    assert_eq!(fetched.get("_id"), Some(&Value::from("u1")));
}

// =============================================================================
// KEY CONDITIONS AND FILTERS
// =============================================================================

#[test]
fn test_query_on_non_key_attribute_names_the_key_schema() {
    let (_transport, store) = create_store();
    let names = HashMap::from([("#name".to_string(), "Name".to_string())]);
    let values = WireItem::from([(":name".to_string(), AttrValue::string("Ana"))]);

    let err = store.query_by_key("#name = :name", &names, &values).unwrap_err();
    assert_eq!(
        engine_message(err),
        "Query condition missed key schema element: _id"
    );
}

#[test]
fn test_scan_filters_on_any_attribute() {
    let (_transport, store) = create_store();
    store.insert(&profile("u1", "Ana")).unwrap();
    store.insert(&profile("u2", "Ben")).unwrap();

    let names = HashMap::from([
        ("#name".to_string(), "Name".to_string()),
        ("#id".to_string(), "_id".to_string()),
    ]);
    let values = WireItem::from([(":name".to_string(), AttrValue::string("Ben"))]);
    let items = store
        .scan_with_filter("#name = :name", &names, &values, "#id,#name")
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].get("_id"), Some(&Value::from("u2")));
}

#[test]
fn test_scan_projection_rejects_undefined_names() {
    let (_transport, store) = create_store();
    let err = store
        .scan_with_filter("#id = :_id", &id_names(), &id_values("u1"), "#id,#ghost")
        .unwrap_err();
    assert!(engine_message(err).contains("attribute name: #ghost"));
}

#[test]
fn test_filter_equality_respects_value_kinds() {
    let (_transport, store) = create_store();
    store
        .insert(&item([("_id", Value::from("u1")), ("Age", Value::Int(30))]))
        .unwrap();

    // A string "30" does not match a number 30.
    let names = HashMap::from([
        ("#age".to_string(), "Age".to_string()),
        ("#id".to_string(), "_id".to_string()),
    ]);
    let string_values = WireItem::from([(":age".to_string(), AttrValue::string("30"))]);
    let items = store
        .scan_with_filter("#age = :age", &names, &string_values, "#id")
        .unwrap();
    assert!(items.is_empty());

    let number_values = WireItem::from([(":age".to_string(), AttrValue::number("30"))]);
    let items = store
        .scan_with_filter("#age = :age", &names, &number_values, "#id")
        .unwrap();
    assert_eq!(items.len(), 1);
}
