//! Plain JSON form of application values
//!
//! Response bodies and diagnostics render plain items as ordinary JSON. Two
//! wrappers cover what JSON cannot say natively:
//!
//! - `{"$bytes": "<base64>"}` for binary data
//! - `{"$f64": "NaN" | "+Inf" | "-Inf"}` for non-finite floats
//!
//! Decoding recognizes the wrappers; any other object is a plain map. JSON
//! numbers come back as `Int` when integral and in i64 range, `Float`
//! otherwise.

use crate::error::CodecError;
use attrstore_core::Value;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Map, Value as Json};
use std::collections::HashMap;

/// Render a plain value as plain JSON (with wrappers where needed).
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => json!(b),
        Value::Int(i) => json!(i),
        Value::Float(f) => encode_float(*f),
        Value::String(s) => json!(s),
        Value::Bytes(b) => json!({ "$bytes": STANDARD.encode(b) }),
        Value::List(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::Map(entries) => {
            let mut obj = Map::new();
            for (name, v) in entries {
                obj.insert(name.clone(), to_json(v));
            }
            Json::Object(obj)
        }
    }
}

/// Render a whole plain item as a JSON object.
pub fn item_to_json(item: &attrstore_core::Item) -> Json {
    let mut obj = Map::new();
    for (name, v) in item {
        obj.insert(name.clone(), to_json(v));
    }
    Json::Object(obj)
}

/// Read a plain value back from plain JSON.
pub fn from_json(json: &Json) -> Result<Value, CodecError> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(CodecError::InvalidNumber(n.to_string()))
            }
        }
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Array(items) => {
            let decoded = items.iter().map(from_json).collect::<Result<Vec<_>, _>>()?;
            Ok(Value::List(decoded))
        }
        Json::Object(obj) => {
            if obj.len() == 1 {
                if let Some(Json::String(b64)) = obj.get("$bytes") {
                    return STANDARD
                        .decode(b64)
                        .map(Value::Bytes)
                        .map_err(|_| CodecError::InvalidBase64(b64.clone()));
                }
                if let Some(Json::String(kind)) = obj.get("$f64") {
                    return decode_float_wrapper(kind);
                }
            }

            let mut entries = HashMap::with_capacity(obj.len());
            for (name, v) in obj {
                entries.insert(name.clone(), from_json(v)?);
            }
            Ok(Value::Map(entries))
        }
    }
}

/// Read a whole plain item back from a JSON object.
pub fn item_from_json(json: &Json) -> Result<attrstore_core::Item, CodecError> {
    match from_json(json)? {
        Value::Map(entries) => Ok(entries),
        other => Err(CodecError::MalformedPayload {
            tag: "item",
            detail: format!("expected a JSON object, got {}", other.type_name()),
        }),
    }
}

fn encode_float(f: f64) -> Json {
    if f.is_nan() {
        json!({ "$f64": "NaN" })
    } else if f == f64::INFINITY {
        json!({ "$f64": "+Inf" })
    } else if f == f64::NEG_INFINITY {
        json!({ "$f64": "-Inf" })
    } else {
        match serde_json::Number::from_f64(f) {
            Some(n) => Json::Number(n),
            // from_f64 refuses only non-finite input, handled above
            None => json!({ "$f64": "NaN" }),
        }
    }
}

fn decode_float_wrapper(kind: &str) -> Result<Value, CodecError> {
    match kind {
        "NaN" => Ok(Value::Float(f64::NAN)),
        "+Inf" => Ok(Value::Float(f64::INFINITY)),
        "-Inf" => Ok(Value::Float(f64::NEG_INFINITY)),
        other => Err(CodecError::MalformedPayload {
            tag: "$f64",
            detail: other.to_string(),
        }),
    }
}
