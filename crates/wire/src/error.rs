//! Codec error types

use thiserror::Error;

/// Errors raised while mapping between plain values, tagged attribute
/// values, and their JSON wire form.
///
/// Every variant is a rejection: the codec never substitutes a default or
/// coerces a value it cannot map exactly.
#[derive(Debug, Error, PartialEq)]
pub enum CodecError {
    /// Plain value has no wire representation
    #[error("unrepresentable value: {0}")]
    Unrepresentable(String),

    /// Number payload does not parse as a decimal number
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// Invalid base64 in a Binary payload
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    /// Wire value was not a tagged object at all
    #[error("wire value must be a single-tag object, got: {0}")]
    NotTagged(String),

    /// Wire value carried zero type tags
    #[error("wire value has no active type tag")]
    MissingTag,

    /// Wire value carried more than one type tag
    #[error("wire value has multiple active type tags: {0}")]
    MultipleTags(String),

    /// Single tag present but not one of the seven known kinds
    #[error("unknown wire type tag: {0}")]
    UnknownTag(String),

    /// Tag payload had the wrong shape for its kind
    #[error("malformed {tag} payload: {detail}")]
    MalformedPayload {
        /// The wire tag whose payload was rejected
        tag: &'static str,
        /// What was wrong with it
        detail: String,
    },
}
