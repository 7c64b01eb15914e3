//! Failure Normalization Tests
//!
//! Injected engine failures cross the facade unchanged, fire the tracer,
//! and never stick to later calls.

use std::sync::Arc;

use crate::*;
use attrstore::{RecordingTracer, StoreError};

#[test]
fn test_injected_failure_keeps_code_and_message() {
    let (transport, store) = create_store();
    transport.fail_next("ThrottlingException", "Rate exceeded");

    let err = store.fetch_by_key(&key_of("u1")).unwrap_err();
    match err {
        StoreError::Transport(inner) => {
            assert_eq!(inner.code, "ThrottlingException");
            assert_eq!(inner.message, "Rate exceeded");
        }
        other => panic!("expected a transport error, got {:?}", other),
    }
}

#[test]
fn test_injected_failure_fires_once() {
    let (transport, store) = create_store();
    transport.fail_next("InternalServerError", "boom");

    store.count().unwrap_err();
    store.count().unwrap();
}

#[test]
fn test_every_operation_surface_reports_failures() {
    let (transport, store) = create_store();
    store.insert(&profile("u1", "Ana")).unwrap();

    let names = HashMap::from([("#Name".to_string(), "Name".to_string())]);
    let values = WireItem::from([(":Name".to_string(), AttrValue::string("x"))]);

    transport.fail_next("InternalServerError", "boom");
    assert!(store.fetch_by_key(&key_of("u1")).is_err());

    transport.fail_next("InternalServerError", "boom");
    assert!(store.insert(&profile("u2", "Ben")).is_err());

    transport.fail_next("InternalServerError", "boom");
    assert!(store.batch_insert(&[profile("u3", "Cam")]).is_err());

    transport.fail_next("InternalServerError", "boom");
    assert!(store
        .conditional_update(&key_of("u1"), "SET #Name = :Name", &names, &values)
        .is_err());

    transport.fail_next("InternalServerError", "boom");
    assert!(store.delete(&key_of("u1")).is_err());

    transport.fail_next("InternalServerError", "boom");
    assert!(store
        .query_by_key("#id = :_id", &id_names(), &id_values("u1"))
        .is_err());

    transport.fail_next("InternalServerError", "boom");
    assert!(store
        .scan_with_filter("#id = :_id", &id_names(), &id_values("u1"), "#id")
        .is_err());

    transport.fail_next("InternalServerError", "boom");
    assert!(store.count().is_err());

    // Only the original insert landed.
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_tracer_sees_events_and_exceptions() {
    let transport = MemoryTransport::new().with_collection(COLLECTION, "_id");
    let tracer = Arc::new(RecordingTracer::new());
    let store = Collection::new(transport.clone(), StoreConfig::new(COLLECTION))
        .with_tracer(Box::new(Arc::clone(&tracer)));

    store.insert(&profile("u1", "Ana")).unwrap();
    transport.fail_next("ThrottlingException", "Rate exceeded");
    store.count().unwrap_err();

    assert_eq!(
        tracer.events(),
        vec![
            format!("inserting item into {}", COLLECTION),
            format!("describing {}", COLLECTION),
        ]
    );
    let exceptions = tracer.exceptions();
    assert_eq!(exceptions.len(), 1);
    assert_eq!(exceptions[0].code, "ThrottlingException");
}
