//! Store operation facade for attrstore.
//!
//! This crate owns the client side of the system: the [`Transport`] seam a
//! store engine plugs into, the [`Collection`] facade that wraps every
//! engine primitive with codec translation and uniform failure
//! normalization, and the bundled [`MemoryTransport`] for tests and
//! embedding.
//!
//! The facade is deliberately narrow. Each operation translates its request,
//! makes one transport call, translates the reply, and on failure logs the
//! operation name with the engine's detail, hands the failure to the
//! optional [`Tracer`], and re-raises it unchanged. Absent keys are empty
//! results for fetch-style calls, and condition failures from update/delete
//! are forwarded with the engine's own code.

#![warn(missing_docs)]

pub mod error;
pub mod facade;
pub mod memory;
pub mod response;
pub mod trace;
pub mod transport;

pub use error::{
    StoreError, StoreResult, TransportError, COLLECTION_NOT_FOUND, CONDITION_FAILED,
    VALIDATION_FAILED,
};
pub use facade::{Collection, StoreConfig};
pub use memory::{MemoryTransport, MAX_BATCH_ITEMS};
pub use response::{CollectionInfo, FetchReply, ItemPage, MutationReply, ResponseMetadata, WriteAck};
pub use trace::{NoopTracer, RecordingTracer, Tracer};
pub use transport::Transport;
