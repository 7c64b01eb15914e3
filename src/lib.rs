//! # Attrstore
//!
//! Toolkit for a typed-attribute table store: a lossless codec between
//! plain values and tagged wire attributes, an operation facade over a
//! pluggable transport, and the pair of request handlers built on top.
//!
//! ## Quick Start
//!
//! ```ignore
//! use attrstore::prelude::*;
//!
//! // An in-memory store with one keyed collection
//! let transport = MemoryTransport::new().with_collection("users-dev", "_id");
//!
//! // Deployment parameters, resolved once at startup
//! let parameters = StaticSource::new()
//!     .with_parameter("/userapi/dev/collection-name", "users-dev");
//!
//! // Both handlers over one shared collection handle
//! let service = Service::connect(
//!     &Settings::new("userapi", "dev"),
//!     &parameters,
//!     transport,
//! )?;
//!
//! // Seed fifty synthetic users, then read one back
//! let seeded = service.admin.handle(&AdminRequest {
//!     user_count: Some(50),
//!     ..AdminRequest::operation("batchWriteItem")
//! });
//! let id = seeded.body["usersWritten"][0]["_id"].as_str().unwrap();
//! let user = service.read.get_user(Some(id));
//! assert_eq!(user.status_code, 200);
//! ```
//!
//! ## Layers
//!
//! - [`Value`] / [`Item`] - the plain, application-facing data model
//! - [`AttrValue`] / [`WireItem`] - the tagged wire form and its codec
//! - [`Collection`] - one collection handle over a [`Transport`]
//! - [`MemoryTransport`] - the in-process store used by tests and demos
//! - [`Service`] - parameter resolution and handler wiring

#![warn(missing_docs)]

pub mod prelude;

// Re-export the plain value model
pub use attrstore_core::{item, Item, Value};

// Re-export the wire form and codec
pub use attrstore_wire::{
    decode_attr, decode_item, deserialize_item, encode_attr, encode_item, from_attr,
    serialize_item, to_attr, AttrValue, CodecError, WireItem,
};

// Re-export the store client
pub use attrstore_client::{
    Collection, CollectionInfo, FetchReply, ItemPage, MemoryTransport, MutationReply,
    NoopTracer, RecordingTracer, ResponseMetadata, StoreConfig, StoreError, StoreResult,
    Tracer, Transport, TransportError, WriteAck, COLLECTION_NOT_FOUND, CONDITION_FAILED,
    MAX_BATCH_ITEMS, VALIDATION_FAILED,
};

// Re-export parameter resolution
pub use attrstore_params::{
    collection_name_parameter, resolve_collection, EnvSource, ParameterError, ParameterSource,
    StaticSource,
};

// Re-export the request handlers
pub use attrstore_handlers::{
    AdminHandler, AdminRequest, BootstrapError, FakeUsers, Operation, ReadHandler,
    ResponseEnvelope, Service, Settings,
};
