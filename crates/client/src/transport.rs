//! The transport seam between the facade and a store engine.

use std::collections::HashMap;

use attrstore_wire::WireItem;

use crate::error::TransportError;
use crate::response::{CollectionInfo, FetchReply, ItemPage, MutationReply, WriteAck};

/// A synchronous connection to a table-store engine.
///
/// Implementations talk to a real remote engine or to the bundled
/// [`MemoryTransport`](crate::MemoryTransport). All calls take the target
/// collection by name, exchange items in wire form, and surface engine
/// rejections as [`TransportError`] with the engine's own code.
///
/// Expression-taking calls use the engine's placeholder dialect: `#token`
/// placeholders resolve through the `names` map to attribute names, `:token`
/// placeholders resolve through the `values` wire-form map to attribute
/// values.
///
/// ## Contract notes
///
/// - `fetch_item` answers an absent key with `item: None`, not an error.
/// - `update_item` and `delete_item` carry an existence precondition: an
///   absent key fails with the condition-failure code.
/// - `batch_put_items` accepts at most 25 items per call; larger batches are
///   rejected with a validation error. Callers partition bigger sets.
/// - `query` and `scan` return a single page with no continuation handling.
pub trait Transport: Send + Sync {
    /// Fetch one item by its full primary key.
    fn fetch_item(&self, collection: &str, key: &WireItem) -> Result<FetchReply, TransportError>;

    /// Insert or replace one item.
    fn put_item(&self, collection: &str, item: &WireItem) -> Result<WriteAck, TransportError>;

    /// Insert or replace up to 25 items in one call.
    fn batch_put_items(
        &self,
        collection: &str,
        items: &[WireItem],
    ) -> Result<WriteAck, TransportError>;

    /// Apply an update expression to an existing item and return its new
    /// image.
    fn update_item(
        &self,
        collection: &str,
        key: &WireItem,
        update_expression: &str,
        names: &HashMap<String, String>,
        values: &WireItem,
    ) -> Result<MutationReply, TransportError>;

    /// Delete an existing item and return its old image.
    fn delete_item(
        &self,
        collection: &str,
        key: &WireItem,
    ) -> Result<MutationReply, TransportError>;

    /// Return the items matching an exact key condition.
    fn query(
        &self,
        collection: &str,
        key_condition: &str,
        names: &HashMap<String, String>,
        values: &WireItem,
    ) -> Result<ItemPage, TransportError>;

    /// Walk the whole collection, keep items passing the filter, and project
    /// each survivor down to the named attributes.
    fn scan(
        &self,
        collection: &str,
        filter: &str,
        names: &HashMap<String, String>,
        values: &WireItem,
        projection: &str,
    ) -> Result<ItemPage, TransportError>;

    /// Return the collection's last-reported metadata.
    fn describe_collection(&self, collection: &str) -> Result<CollectionInfo, TransportError>;
}
