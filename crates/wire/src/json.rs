//! JSON form of tagged attribute values
//!
//! On the wire, each attribute value is a JSON object with exactly one key:
//! its type tag. `{"S": "ana"}`, `{"N": "30"}`, `{"BOOL": true}`,
//! `{"NULL": true}`, `{"B": "<base64>"}`, `{"L": [...]}`, `{"M": {...}}`.
//!
//! Decoding is strict. An object with zero tags, more than one key, an
//! unknown tag, or a payload of the wrong shape is a [`CodecError`]; there
//! is no default interpretation for a value the protocol did not produce.

use crate::attr::{AttrValue, WireItem};
use crate::error::CodecError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Map, Value as Json};

/// Encode one tagged attribute value as its single-tag JSON object.
pub fn encode_attr(attr: &AttrValue) -> Json {
    match attr {
        AttrValue::String(s) => json!({ "S": s }),
        AttrValue::Number(n) => json!({ "N": n }),
        AttrValue::Bool(b) => json!({ "BOOL": b }),
        AttrValue::Null => json!({ "NULL": true }),
        AttrValue::Binary(bytes) => json!({ "B": STANDARD.encode(bytes) }),
        AttrValue::List(items) => {
            let encoded: Vec<Json> = items.iter().map(encode_attr).collect();
            json!({ "L": encoded })
        }
        AttrValue::Map(entries) => {
            let mut encoded = Map::new();
            for (name, v) in entries {
                encoded.insert(name.clone(), encode_attr(v));
            }
            json!({ "M": encoded })
        }
    }
}

/// Decode one single-tag JSON object back into a tagged attribute value.
pub fn decode_attr(json: &Json) -> Result<AttrValue, CodecError> {
    let obj = json
        .as_object()
        .ok_or_else(|| CodecError::NotTagged(json.to_string()))?;

    if obj.is_empty() {
        return Err(CodecError::MissingTag);
    }
    if obj.len() > 1 {
        let mut tags: Vec<&str> = obj.keys().map(String::as_str).collect();
        tags.sort_unstable();
        return Err(CodecError::MultipleTags(tags.join(",")));
    }

    // Exactly one entry past this point
    let (tag, payload) = obj
        .iter()
        .next()
        .ok_or(CodecError::MissingTag)?;

    match tag.as_str() {
        "S" => match payload.as_str() {
            Some(s) => Ok(AttrValue::String(s.to_string())),
            None => Err(malformed("S", payload)),
        },
        "N" => match payload.as_str() {
            Some(n) => Ok(AttrValue::Number(n.to_string())),
            None => Err(malformed("N", payload)),
        },
        "BOOL" => match payload.as_bool() {
            Some(b) => Ok(AttrValue::Bool(b)),
            None => Err(malformed("BOOL", payload)),
        },
        "NULL" => match payload.as_bool() {
            // The marker payload is ignored; the engine always sends true
            Some(_) => Ok(AttrValue::Null),
            None => Err(malformed("NULL", payload)),
        },
        "B" => match payload.as_str() {
            Some(b64) => STANDARD
                .decode(b64)
                .map(AttrValue::Binary)
                .map_err(|_| CodecError::InvalidBase64(b64.to_string())),
            None => Err(malformed("B", payload)),
        },
        "L" => match payload.as_array() {
            Some(items) => {
                let decoded = items
                    .iter()
                    .map(decode_attr)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(AttrValue::List(decoded))
            }
            None => Err(malformed("L", payload)),
        },
        "M" => match payload.as_object() {
            Some(entries) => {
                let mut decoded = std::collections::HashMap::with_capacity(entries.len());
                for (name, v) in entries {
                    decoded.insert(name.clone(), decode_attr(v)?);
                }
                Ok(AttrValue::Map(decoded))
            }
            None => Err(malformed("M", payload)),
        },
        other => Err(CodecError::UnknownTag(other.to_string())),
    }
}

/// Encode a whole wire item: a JSON object from attribute name to tagged
/// value.
pub fn encode_item(item: &WireItem) -> Json {
    let mut obj = Map::new();
    for (name, attr) in item {
        obj.insert(name.clone(), encode_attr(attr));
    }
    Json::Object(obj)
}

/// Decode a whole wire item from its JSON object form.
pub fn decode_item(json: &Json) -> Result<WireItem, CodecError> {
    let obj = json
        .as_object()
        .ok_or_else(|| CodecError::NotTagged(json.to_string()))?;

    let mut item = WireItem::with_capacity(obj.len());
    for (name, v) in obj {
        item.insert(name.clone(), decode_attr(v)?);
    }
    Ok(item)
}

fn malformed(tag: &'static str, payload: &Json) -> CodecError {
    CodecError::MalformedPayload {
        tag,
        detail: payload.to_string(),
    }
}
