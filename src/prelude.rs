//! Convenient imports for attrstore.
//!
//! This module re-exports the types most callers need so one import gets a
//! working service:
//!
//! ```ignore
//! use attrstore::prelude::*;
//!
//! let transport = MemoryTransport::new().with_collection("users-dev", "_id");
//! let parameters = StaticSource::new()
//!     .with_parameter("/userapi/dev/collection-name", "users-dev");
//! let service = Service::connect(&Settings::new("userapi", "dev"), &parameters, transport)?;
//! ```

// Service wiring
pub use crate::{Service, Settings};

// Handlers and their envelopes
pub use crate::{AdminHandler, AdminRequest, Operation, ReadHandler, ResponseEnvelope};

// Store client
pub use crate::{Collection, MemoryTransport, StoreConfig, StoreError, Transport};

// Plain and wire data models
pub use crate::{item, AttrValue, Item, Value, WireItem};

// Parameter sources
pub use crate::{EnvSource, ParameterSource, StaticSource};

// Re-export serde_json for convenience
pub use serde_json::json;
