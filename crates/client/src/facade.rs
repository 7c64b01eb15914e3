//! Store operation facade.
//!
//! [`Collection`] exposes one narrow method per store primitive. Every method
//! follows the same shape: translate the request through the codec, invoke
//! the transport, translate the reply back, and normalize failure. Failure
//! normalization is deliberately thin: log the operation name with the
//! engine's detail, hand the failure to the tracer if one is configured, and
//! re-raise it unchanged. No retries, no backoff, no error translation.

use std::collections::HashMap;

use attrstore_core::Item;
use attrstore_wire::{deserialize_item, serialize_item, WireItem};
use tracing::error;

use crate::error::{StoreResult, TransportError};
use crate::response::WriteAck;
use crate::trace::Tracer;
use crate::transport::Transport;

/// Process-wide facade configuration, built once at startup.
///
/// Replaces ambient globals: the resolved collection name is passed in
/// explicitly and owned by the facade for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Name of the collection all operations target.
    pub collection: String,
}

impl StoreConfig {
    /// Configuration targeting one collection.
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
        }
    }
}

/// A handle to one collection, wrapping a transport with codec translation
/// and uniform failure normalization.
///
/// Items cross this boundary in plain form; the facade serializes payloads
/// on the way out and deserializes replies on the way in. Keys and
/// expression-value maps are taken in wire form, matching the engine's
/// placeholder dialect.
pub struct Collection<T: Transport> {
    transport: T,
    config: StoreConfig,
    tracer: Option<Box<dyn Tracer>>,
}

impl<T: Transport> Collection<T> {
    /// Bind a transport to a configured collection.
    pub fn new(transport: T, config: StoreConfig) -> Self {
        Self {
            transport,
            config,
            tracer: None,
        }
    }

    /// Attach a tracing collaborator. Without one, trace capture is a no-op.
    pub fn with_tracer(mut self, tracer: Box<dyn Tracer>) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Name of the collection this handle targets.
    pub fn collection_name(&self) -> &str {
        &self.config.collection
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch one item by key.
    ///
    /// An absent key answers with an empty item, never an error.
    pub fn fetch_by_key(&self, key: &WireItem) -> StoreResult<Item> {
        self.note(&format!("fetching item from {}", self.config.collection));
        let reply = self.run("fetch_by_key", |t, c| t.fetch_item(c, key))?;
        match reply.item {
            Some(wire) => Ok(deserialize_item(&wire)?),
            None => Ok(Item::new()),
        }
    }

    /// Insert or replace one item. The caller assigns the item's unique
    /// identifier before calling.
    pub fn insert(&self, item: &Item) -> StoreResult<WriteAck> {
        self.note(&format!("inserting item into {}", self.config.collection));
        let wire = serialize_item(item)?;
        self.run("insert", |t, c| t.put_item(c, &wire))
    }

    /// Insert one batch of at most 25 items.
    ///
    /// The engine caps batch size at 25; the transport rejects anything
    /// larger with a validation error. Callers own partitioning a bigger set
    /// into chunks and stopping at the first failed chunk.
    pub fn batch_insert(&self, items: &[Item]) -> StoreResult<WriteAck> {
        self.note(&format!(
            "batch inserting {} items into {}",
            items.len(),
            self.config.collection
        ));
        let wire: Vec<WireItem> = items
            .iter()
            .map(serialize_item)
            .collect::<Result<_, _>>()?;
        self.run("batch_insert", |t, c| t.batch_put_items(c, &wire))
    }

    /// Update an existing item and return its new image.
    ///
    /// The update carries an existence precondition: an absent key fails
    /// with the engine's condition-failure code, forwarded unchanged.
    /// Callers wanting a friendlier miss can pre-check with
    /// [`fetch_by_key`](Self::fetch_by_key).
    pub fn conditional_update(
        &self,
        key: &WireItem,
        update_expression: &str,
        names: &HashMap<String, String>,
        values: &WireItem,
    ) -> StoreResult<Item> {
        self.note(&format!("updating item in {}", self.config.collection));
        let reply = self.run("conditional_update", |t, c| {
            t.update_item(c, key, update_expression, names, values)
        })?;
        Ok(deserialize_item(&reply.attributes)?)
    }

    /// Delete an existing item and return its pre-delete image.
    ///
    /// Same existence precondition as [`conditional_update`](Self::conditional_update).
    pub fn delete(&self, key: &WireItem) -> StoreResult<Item> {
        self.note(&format!("deleting item from {}", self.config.collection));
        let reply = self.run("delete", |t, c| t.delete_item(c, key))?;
        Ok(deserialize_item(&reply.attributes)?)
    }

    /// Return the items matching an exact key condition, single page.
    pub fn query_by_key(
        &self,
        key_condition: &str,
        names: &HashMap<String, String>,
        values: &WireItem,
    ) -> StoreResult<Vec<Item>> {
        self.note(&format!("querying {}", self.config.collection));
        let page = self.run("query_by_key", |t, c| {
            t.query(c, key_condition, names, values)
        })?;
        page.items
            .iter()
            .map(|wire| deserialize_item(wire).map_err(Into::into))
            .collect()
    }

    /// Scan the whole collection, filter, and project, single page.
    pub fn scan_with_filter(
        &self,
        filter: &str,
        names: &HashMap<String, String>,
        values: &WireItem,
        projection: &str,
    ) -> StoreResult<Vec<Item>> {
        self.note(&format!("scanning {}", self.config.collection));
        let page = self.run("scan_with_filter", |t, c| {
            t.scan(c, filter, names, values, projection)
        })?;
        page.items
            .iter()
            .map(|wire| deserialize_item(wire).map_err(Into::into))
            .collect()
    }

    /// The collection's last-reported item count.
    ///
    /// Real engines refresh this counter periodically, so the value may lag
    /// the live count. Callers must not assume exactness.
    pub fn count(&self) -> StoreResult<u64> {
        self.note(&format!("describing {}", self.config.collection));
        let info = self.run("count", |t, c| t.describe_collection(c))?;
        Ok(info.item_count)
    }

    /// Execute a transport call and normalize its failure.
    ///
    /// On rejection: log the operation name with the engine detail, capture
    /// the failure in the tracer, then re-raise the same failure.
    fn run<R>(
        &self,
        operation: &str,
        call: impl FnOnce(&T, &str) -> Result<R, TransportError>,
    ) -> StoreResult<R> {
        match call(&self.transport, &self.config.collection) {
            Ok(reply) => Ok(reply),
            Err(err) => {
                error!("{} failed: {}", operation, err);
                if let Some(tracer) = &self.tracer {
                    tracer.capture_exception(&err);
                }
                Err(err.into())
            }
        }
    }

    fn note(&self, description: &str) {
        if let Some(tracer) = &self.tracer {
            tracer.capture_event(description);
        }
    }
}

impl<T: Transport + std::fmt::Debug> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("transport", &self.transport)
            .field("config", &self.config)
            .field("tracer", &self.tracer.is_some())
            .finish()
    }
}
