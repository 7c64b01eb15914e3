//! Table API Comprehensive Test Suite
//!
//! This suite drives the public crate surface end to end: plain items go
//! through the attribute codec, across the [`Transport`] seam, into the
//! in-memory store, and back out unchanged.
//!
//! ## Key Verification Points
//!
//! 1. The codec is lossless for every attribute kind (ints never blur
//!    into floats, strings never blur into bytes)
//! 2. The facade normalizes failures and never invents data (absent keys
//!    are empty items, condition failures keep the engine's code)
//! 3. The expression dialect enforces the same rules as the real store
//!    (key schema, name/value placeholders, batch limits)
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test table_api_comprehensive
//!
//! # Run the store tests only
//! cargo test --test table_api_comprehensive store::
//! ```

use std::collections::HashMap;

use attrstore::{
    item, AttrValue, Collection, Item, MemoryTransport, StoreConfig, Value, WireItem,
};

// Test modules
pub mod codec;
pub mod store;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Collection every test reads and writes.
pub const COLLECTION: &str = "users-comprehensive";

/// Create a fresh in-memory store and a facade over it.
pub fn create_store() -> (MemoryTransport, Collection<MemoryTransport>) {
    let transport = MemoryTransport::new().with_collection(COLLECTION, "_id");
    let store = Collection::new(transport.clone(), StoreConfig::new(COLLECTION));
    (transport, store)
}

/// The wire key for one record id.
pub fn key_of(id: &str) -> WireItem {
    WireItem::from([("_id".to_string(), AttrValue::string(id))])
}

/// A minimal user record.
pub fn profile(id: &str, name: &str) -> Item {
    item([
        ("_id", Value::from(id)),
        ("Name", Value::from(name)),
        ("Email", Value::from(format!("{}@example.com", name.to_lowercase()))),
    ])
}

/// Expression value map with a single `:_id` placeholder.
pub fn id_values(id: &str) -> WireItem {
    WireItem::from([(":_id".to_string(), AttrValue::string(id))])
}

/// Expression name map with a single `#id -> _id` entry.
pub fn id_names() -> HashMap<String, String> {
    HashMap::from([("#id".to_string(), "_id".to_string())])
}

/// Standard attribute values covering all eight kinds.
pub fn standard_attribute_values() -> Vec<(&'static str, Value)> {
    vec![
        ("null", Value::Null),
        ("bool_true", Value::Bool(true)),
        ("bool_false", Value::Bool(false)),
        ("int_pos", Value::Int(42)),
        ("int_neg", Value::Int(-42)),
        ("int_zero", Value::Int(0)),
        ("int_max", Value::Int(i64::MAX)),
        ("int_min", Value::Int(i64::MIN)),
        ("float_pos", Value::Float(3.14159)),
        ("float_neg", Value::Float(-2.71828)),
        ("float_whole", Value::Float(5.0)),
        ("float_tiny", Value::Float(1e-10)),
        ("string", Value::String("hello world".into())),
        ("string_unicode", Value::String("日本語 🌍".into())),
        ("string_empty", Value::String(String::new())),
        ("bytes", Value::Bytes(vec![0x00, 0x01, 0xFF, 0xFE])),
        ("bytes_empty", Value::Bytes(vec![])),
        (
            "list",
            Value::List(vec![Value::Int(1), Value::String("two".into())]),
        ),
        ("map", {
            let mut m = HashMap::new();
            m.insert("nested".to_string(), Value::Int(123));
            Value::Map(m)
        }),
    ]
}
