//! Request handlers for attrstore
//!
//! Two entry points, mirroring the service's two functions:
//!
//! - [`AdminHandler`]: a JSON command envelope (`operation` plus profile
//!   fields) dispatched over the full table surface: single and batch
//!   writes, reads, updates, queries, scans, deletes, and counts
//! - [`ReadHandler`]: a single-purpose user lookup by id
//!
//! Both are built once per process by [`Service::connect`], which resolves
//! the collection name through `attrstore-params` and shares one
//! [`Collection`](attrstore_client::Collection) handle between them. Every
//! request answers with a [`ResponseEnvelope`]; bad input and store
//! failures become status 400 bodies, never panics.

#![warn(missing_docs)]

pub mod admin;
pub mod bootstrap;
pub mod envelope;
pub mod fixtures;
pub mod operation;
pub mod read;
pub mod request;

pub use admin::AdminHandler;
pub use bootstrap::{BootstrapError, Service, Settings};
pub use envelope::ResponseEnvelope;
pub use fixtures::FakeUsers;
pub use operation::Operation;
pub use read::ReadHandler;
pub use request::AdminRequest;
