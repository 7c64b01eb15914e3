//! Number Handling Tests
//!
//! Integers and floats are distinct kinds end to end: storage never blurs
//! `7` into `7.0`, and non-finite floats never reach the engine.

use crate::*;
use attrstore::{to_attr, StoreError};

// =============================================================================
// KIND PRESERVATION
// =============================================================================

#[test]
fn test_int_stays_int_through_the_store() {
    let (_transport, store) = create_store();
    store
        .insert(&item([("_id", Value::from("n1")), ("Age", Value::Int(30))]))
        .unwrap();

    let fetched = store.fetch_by_key(&key_of("n1")).unwrap();
    assert_eq!(fetched.get("Age"), Some(&Value::Int(30)));
    assert_ne!(fetched.get("Age"), Some(&Value::Float(30.0)));
}

#[test]
fn test_whole_float_stays_float_through_the_store() {
    let (_transport, store) = create_store();
    store
        .insert(&item([
            ("_id", Value::from("n2")),
            ("Score", Value::Float(5.0)),
        ]))
        .unwrap();

    let fetched = store.fetch_by_key(&key_of("n2")).unwrap();
    assert_eq!(fetched.get("Score"), Some(&Value::Float(5.0)));
    assert_ne!(fetched.get("Score"), Some(&Value::Int(5)));
}

#[test]
fn test_whole_float_wire_form_keeps_the_point() {
    // The only thing separating Float(5.0) from Int(5) on the wire is the
    // decimal point in the number payload.
    assert_eq!(to_attr(&Value::Float(5.0)).unwrap(), AttrValue::number("5.0"));
    assert_eq!(to_attr(&Value::Int(5)).unwrap(), AttrValue::number("5"));
}

#[test]
fn test_i64_extremes_survive_exactly() {
    let (_transport, store) = create_store();
    store
        .insert(&item([
            ("_id", Value::from("n3")),
            ("Max", Value::Int(i64::MAX)),
            ("Min", Value::Int(i64::MIN)),
        ]))
        .unwrap();

    let fetched = store.fetch_by_key(&key_of("n3")).unwrap();
    assert_eq!(fetched.get("Max"), Some(&Value::Int(i64::MAX)));
    assert_eq!(fetched.get("Min"), Some(&Value::Int(i64::MIN)));
}

#[test]
fn test_subnormal_and_negative_floats_survive() {
    let (_transport, store) = create_store();
    let values = [f64::MIN_POSITIVE, -0.0, 2.2250738585072014e-308, -1e300];
    for (i, f) in values.iter().enumerate() {
        let id = format!("f{}", i);
        store
            .insert(&item([
                ("_id", Value::from(id.as_str())),
                ("X", Value::Float(*f)),
            ]))
            .unwrap();
        let fetched = store.fetch_by_key(&key_of(&id)).unwrap();
        assert_eq!(fetched.get("X"), Some(&Value::Float(*f)));
    }
}

// =============================================================================
// NON-FINITE REJECTION
// =============================================================================

#[test]
fn test_nan_is_rejected_before_the_transport() {
    let (_transport, store) = create_store();
    let err = store
        .insert(&item([
            ("_id", Value::from("bad")),
            ("X", Value::Float(f64::NAN)),
        ]))
        .unwrap_err();

    assert!(matches!(err, StoreError::Codec(_)));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_infinities_are_rejected_before_the_transport() {
    let (_transport, store) = create_store();
    for f in [f64::INFINITY, f64::NEG_INFINITY] {
        let err = store
            .insert(&item([("_id", Value::from("bad")), ("X", Value::Float(f))]))
            .unwrap_err();
        assert!(err.is_codec());
    }
    assert_eq!(store.count().unwrap(), 0);
}
