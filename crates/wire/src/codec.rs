//! The attribute codec: plain values <-> tagged wire values
//!
//! `serialize_item` inspects each plain value's kind and emits the matching
//! tag; `deserialize_item` is the tag-driven inverse. The mapping is lossless
//! for everything the plain value model can hold, so
//! `deserialize_item(&serialize_item(&x)?)? == x` for all x. The single
//! unrepresentable case is a non-finite float, which has no decimal wire
//! form and fails serialization with [`CodecError::Unrepresentable`].

use crate::attr::{AttrValue, WireItem};
use crate::error::CodecError;
use attrstore_core::{Item, Value};
use std::collections::HashMap;

/// Map one plain value to its tagged wire form.
pub fn to_attr(value: &Value) -> Result<AttrValue, CodecError> {
    match value {
        Value::Null => Ok(AttrValue::Null),
        Value::Bool(b) => Ok(AttrValue::Bool(*b)),
        Value::Int(i) => Ok(AttrValue::Number(i.to_string())),
        Value::Float(f) => Ok(AttrValue::Number(format_float(*f)?)),
        Value::String(s) => Ok(AttrValue::String(s.clone())),
        Value::Bytes(b) => Ok(AttrValue::Binary(b.clone())),
        Value::List(items) => {
            let encoded = items.iter().map(to_attr).collect::<Result<Vec<_>, _>>()?;
            Ok(AttrValue::List(encoded))
        }
        Value::Map(entries) => {
            let mut encoded = HashMap::with_capacity(entries.len());
            for (name, v) in entries {
                encoded.insert(name.clone(), to_attr(v)?);
            }
            Ok(AttrValue::Map(encoded))
        }
    }
}

/// Map one tagged wire value back to its plain form.
pub fn from_attr(attr: &AttrValue) -> Result<Value, CodecError> {
    match attr {
        AttrValue::Null => Ok(Value::Null),
        AttrValue::Bool(b) => Ok(Value::Bool(*b)),
        AttrValue::Number(n) => parse_number(n),
        AttrValue::String(s) => Ok(Value::String(s.clone())),
        AttrValue::Binary(b) => Ok(Value::Bytes(b.clone())),
        AttrValue::List(items) => {
            let decoded = items.iter().map(from_attr).collect::<Result<Vec<_>, _>>()?;
            Ok(Value::List(decoded))
        }
        AttrValue::Map(entries) => {
            let mut decoded = HashMap::with_capacity(entries.len());
            for (name, v) in entries {
                decoded.insert(name.clone(), from_attr(v)?);
            }
            Ok(Value::Map(decoded))
        }
    }
}

/// Serialize a whole plain item into its wire form, attribute by attribute.
pub fn serialize_item(item: &Item) -> Result<WireItem, CodecError> {
    let mut wire = WireItem::with_capacity(item.len());
    for (name, value) in item {
        wire.insert(name.clone(), to_attr(value)?);
    }
    Ok(wire)
}

/// Deserialize a whole wire item into its plain form, attribute by
/// attribute.
pub fn deserialize_item(wire: &WireItem) -> Result<Item, CodecError> {
    let mut item = Item::with_capacity(wire.len());
    for (name, attr) in wire {
        item.insert(name.clone(), from_attr(attr)?);
    }
    Ok(item)
}

/// Format a float as wire number text, keeping a decimal point or exponent
/// so the float kind survives the round trip ("30" is an Int on the way
/// back; "30.0" is a Float).
fn format_float(f: f64) -> Result<String, CodecError> {
    if !f.is_finite() {
        return Err(CodecError::Unrepresentable(format!(
            "non-finite float {f} has no wire number form"
        )));
    }
    let s = f.to_string();
    if s.contains('.') || s.contains('e') || s.contains('E') {
        Ok(s)
    } else {
        Ok(format!("{s}.0"))
    }
}

/// Parse wire number text back to a plain value: integer when the text is
/// integral and fits an i64, float otherwise.
fn parse_number(text: &str) -> Result<Value, CodecError> {
    let looks_float = text.contains('.') || text.contains('e') || text.contains('E');

    if !looks_float {
        if let Ok(i) = text.parse::<i64>() {
            return Ok(Value::Int(i));
        }
        // Integral but outside i64: fall through to f64
    }

    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Value::Float(f)),
        _ => Err(CodecError::InvalidNumber(text.to_string())),
    }
}
