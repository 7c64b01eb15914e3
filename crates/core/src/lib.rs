//! Core value model for attrstore
//!
//! This crate defines the plain, application-facing data model shared by
//! every other attrstore crate:
//!
//! - [`Value`]: the untyped attribute value (eight variants, no coercion)
//! - [`Item`]: one record, a map from attribute name to [`Value`]
//!
//! The typed wire counterpart of this model lives in `attrstore-wire`; this
//! crate deliberately knows nothing about tags, stores, or transports.

#![warn(missing_docs)]

pub mod item;
pub mod value;

pub use item::{item, Item};
pub use value::Value;
