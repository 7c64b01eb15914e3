//! Store Facade Tests
//!
//! The [`Collection`](attrstore::Collection) facade over the in-memory
//! transport: reads, writes, batches, expressions, and failure handling.

mod batch;
mod crud;
mod expressions;
mod failures;
