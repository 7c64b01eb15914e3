//! Codec Tests
//!
//! Plain values through the store and back, for every attribute kind.

mod numbers;
