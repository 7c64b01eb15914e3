//! Plain items
//!
//! An [`Item`] is one record as application code sees it: attribute name to
//! plain [`Value`], no type tags. Items are transient, built per call, and
//! never cached by this library.

use crate::value::Value;
use std::collections::HashMap;

/// One plain record: attribute name to untyped value.
///
/// Attribute names are unique per item (map semantics). An empty item is the
/// canonical "not found" result for fetch-style operations.
pub type Item = HashMap<String, Value>;

/// Build an [`Item`] from `(name, value)` pairs.
///
/// Sugar over collecting into a `HashMap`; anything convertible into a
/// `String`/[`Value`] works on either side:
///
/// ```
/// use attrstore_core::{item, Value};
///
/// let user = item([("Name", "Ana"), ("City", "Porto")]);
/// assert_eq!(user.get("Name"), Some(&Value::from("Ana")));
/// ```
pub fn item<K, V, I>(entries: I) -> Item
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
