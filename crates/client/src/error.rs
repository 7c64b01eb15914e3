//! Error types for store operations.
//!
//! The facade never translates a failure into a different kind: a transport
//! rejection is logged, optionally captured by the tracer, and re-raised as
//! `StoreError::Transport` carrying the engine's own code and message.

use attrstore_wire::CodecError;
use thiserror::Error;

/// Engine code for a failed conditional write (absent or non-matching item).
pub const CONDITION_FAILED: &str = "ConditionalCheckFailedException";

/// Engine code for a request the engine refuses to execute as written.
pub const VALIDATION_FAILED: &str = "ValidationException";

/// Engine code for an operation against a collection that does not exist.
pub const COLLECTION_NOT_FOUND: &str = "ResourceNotFoundException";

/// A remote-store rejection, as reported by the transport.
///
/// `code` is the engine's stable error code (permission, throttling,
/// validation, condition failure); `message` is the human-readable detail.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{code}: {message}")]
pub struct TransportError {
    /// Engine error code, e.g. `ConditionalCheckFailedException`.
    pub code: String,
    /// Human-readable detail from the engine.
    pub message: String,
}

impl TransportError {
    /// Create an error with an explicit engine code.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// A failed conditional write.
    pub fn condition_failed(message: impl Into<String>) -> Self {
        Self::new(CONDITION_FAILED, message)
    }

    /// A request the engine refuses as malformed or over-limit.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(VALIDATION_FAILED, message)
    }

    /// An operation against an unknown collection.
    pub fn collection_not_found(collection: &str) -> Self {
        Self::new(
            COLLECTION_NOT_FOUND,
            format!("Requested resource not found: {}", collection),
        )
    }

    /// Check whether this is a conditional-write failure.
    pub fn is_condition_failed(&self) -> bool {
        self.code == CONDITION_FAILED
    }

    /// Check whether this is a validation rejection.
    pub fn is_validation(&self) -> bool {
        self.code == VALIDATION_FAILED
    }
}

/// All store client errors.
///
/// "Not found" is not represented here: fetch-style operations answer an
/// absent key with an empty result instead of an error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The transport rejected the call.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A value could not cross the wire boundary in either direction.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

impl StoreError {
    /// Check whether this wraps a conditional-write failure.
    pub fn is_condition_failed(&self) -> bool {
        matches!(self, StoreError::Transport(e) if e.is_condition_failed())
    }

    /// Check whether this wraps a validation rejection.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Transport(e) if e.is_validation())
    }

    /// Check whether this is a codec failure.
    pub fn is_codec(&self) -> bool {
        matches!(self, StoreError::Codec(_))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
