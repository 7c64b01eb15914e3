//! Wire encoding for attrstore
//!
//! The remote table store speaks in *tagged* attribute values: every value
//! carries its primitive kind (`S`, `N`, `BOOL`, `NULL`, `B`, `L`, `M`).
//! This crate owns that representation and the three mappings around it:
//!
//! - [`codec`]: plain [`Value`](attrstore_core::Value) <-> tagged
//!   [`AttrValue`] (the attribute codec; lossless and round-trip safe)
//! - [`json`]: tagged [`AttrValue`] <-> the store protocol's single-tag JSON
//!   objects (`{"S": "ana"}`, `{"N": "30"}`, ...)
//! - [`plain`]: plain values <-> plain JSON with the `$bytes`/`$f64`
//!   wrappers (for response bodies and diagnostics)
//!
//! Malformed wire input (zero, multiple, or unknown tags; bad payloads) is
//! rejected with [`CodecError`], never coerced.

#![warn(missing_docs)]

pub mod attr;
pub mod codec;
pub mod error;
pub mod json;
pub mod plain;

pub use attr::{AttrValue, WireItem};
pub use codec::{deserialize_item, from_attr, serialize_item, to_attr};
pub use error::CodecError;
pub use json::{decode_attr, decode_item, encode_attr, encode_item};
