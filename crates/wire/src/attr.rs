//! Tagged attribute values
//!
//! [`AttrValue`] is one attribute as the remote store engine holds it: the
//! value plus its primitive kind. The Rust enum makes the "exactly one tag
//! is active" invariant structural; a value with zero or two tags cannot be
//! constructed, only rejected at the JSON boundary.

use std::collections::HashMap;

/// One attribute value in the store's typed wire representation.
///
/// `Number` carries the engine's decimal string form rather than a float so
/// numeric precision survives transit unchanged. `List` and `Map` nest
/// recursively.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// UTF-8 string (`S`)
    String(String),

    /// Decimal number in string form (`N`)
    Number(String),

    /// Boolean (`BOOL`)
    Bool(bool),

    /// Null marker (`NULL`)
    Null,

    /// Raw bytes (`B`); base64 on the JSON wire
    Binary(Vec<u8>),

    /// Ordered sequence of attribute values (`L`)
    List(Vec<AttrValue>),

    /// Name-keyed map of attribute values (`M`)
    Map(HashMap<String, AttrValue>),
}

/// One row/document as transmitted over the wire: attribute name to tagged
/// value.
pub type WireItem = HashMap<String, AttrValue>;

impl AttrValue {
    /// The wire tag for this value's kind (for error messages and logs)
    pub fn tag(&self) -> &'static str {
        match self {
            AttrValue::String(_) => "S",
            AttrValue::Number(_) => "N",
            AttrValue::Bool(_) => "BOOL",
            AttrValue::Null => "NULL",
            AttrValue::Binary(_) => "B",
            AttrValue::List(_) => "L",
            AttrValue::Map(_) => "M",
        }
    }

    /// Convenience constructor for a string attribute
    pub fn string(s: impl Into<String>) -> Self {
        AttrValue::String(s.into())
    }

    /// Convenience constructor for a number attribute from its decimal text
    pub fn number(n: impl Into<String>) -> Self {
        AttrValue::Number(n.into())
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }
}
