//! In-memory transport.
//!
//! [`MemoryTransport`] implements [`Transport`] over plain maps, honoring the
//! engine behaviors the facade and handlers rely on: wire-form items, the
//! placeholder expression dialect, the 25-item batch cap, existence
//! preconditions on update/delete, and per-reply metadata. Collections are
//! registered up front with their key attribute, the way a real engine owns
//! a table's key schema.
//!
//! Cloning the transport clones a handle to the same tables, so tests can
//! keep one handle for inspection and failure injection while the facade
//! owns another.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use attrstore_wire::{encode_attr, encode_item, AttrValue, WireItem};
use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use crate::error::TransportError;
use crate::response::{CollectionInfo, FetchReply, ItemPage, MutationReply, ResponseMetadata, WriteAck};
use crate::transport::Transport;

/// The engine's cap on items per batch write.
pub const MAX_BATCH_ITEMS: usize = 25;

struct Table {
    key_attribute: String,
    // Keyed by the canonical JSON form of the key attribute value, so
    // iteration (and therefore scan order) is deterministic.
    items: BTreeMap<String, WireItem>,
}

#[derive(Default)]
struct Inner {
    tables: RwLock<BTreeMap<String, Table>>,
    injected: Mutex<Option<TransportError>>,
}

/// An in-process table store for tests and embedding.
#[derive(Clone, Default)]
pub struct MemoryTransport {
    inner: Arc<Inner>,
}

impl MemoryTransport {
    /// An empty store with no collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection with a single key attribute.
    pub fn with_collection(self, name: impl Into<String>, key_attribute: impl Into<String>) -> Self {
        self.inner.tables.write().insert(
            name.into(),
            Table {
                key_attribute: key_attribute.into(),
                items: BTreeMap::new(),
            },
        );
        self
    }

    /// Names of the registered collections, sorted.
    pub fn collection_names(&self) -> Vec<String> {
        self.inner.tables.read().keys().cloned().collect()
    }

    /// Arm a one-shot failure: the next call, whatever it is, fails with
    /// this error instead of executing.
    pub fn fail_next(&self, code: impl Into<String>, message: impl Into<String>) {
        *self.inner.injected.lock() = Some(TransportError::new(code, message));
    }

    fn take_injected(&self) -> Result<(), TransportError> {
        match self.inner.injected.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn metadata() -> ResponseMetadata {
        ResponseMetadata::ok(Uuid::new_v4().to_string())
    }

    fn with_table<R>(
        &self,
        collection: &str,
        op: impl FnOnce(&Table) -> Result<R, TransportError>,
    ) -> Result<R, TransportError> {
        let tables = self.inner.tables.read();
        match tables.get(collection) {
            Some(table) => op(table),
            None => Err(TransportError::collection_not_found(collection)),
        }
    }

    fn with_table_mut<R>(
        &self,
        collection: &str,
        op: impl FnOnce(&mut Table) -> Result<R, TransportError>,
    ) -> Result<R, TransportError> {
        let mut tables = self.inner.tables.write();
        match tables.get_mut(collection) {
            Some(table) => op(table),
            None => Err(TransportError::collection_not_found(collection)),
        }
    }
}

// Key handling. A key item must name exactly the collection's key attribute;
// a stored item must at least contain it. The fingerprint is the canonical
// JSON encoding of the key attribute's wire value.

fn fingerprint(value: &AttrValue) -> String {
    encode_attr(value).to_string()
}

fn key_fingerprint(table: &Table, key: &WireItem) -> Result<String, TransportError> {
    if key.len() != 1 {
        return Err(TransportError::validation(
            "The provided key element does not match the schema",
        ));
    }
    match key.get(&table.key_attribute) {
        Some(value) => Ok(fingerprint(value)),
        None => Err(TransportError::validation(
            "The provided key element does not match the schema",
        )),
    }
}

fn item_fingerprint(table: &Table, item: &WireItem) -> Result<String, TransportError> {
    match item.get(&table.key_attribute) {
        Some(value) => Ok(fingerprint(value)),
        None => Err(TransportError::validation(format!(
            "One or more parameter values were invalid: Missing the key {} in the item",
            table.key_attribute
        ))),
    }
}

// ============================================================================
// Expression dialect
// ============================================================================
//
// The subset the handlers emit: `SET #n = :v[, #n = :v...]` update
// expressions, single `#n = :v` equality conditions and filters, and
// comma-separated `#n` projections. Anything else is rejected the way the
// engine rejects it, as a validation error.

fn syntax_error(kind: &str, token: &str) -> TransportError {
    TransportError::validation(format!("Invalid {}: Syntax error; token: \"{}\"", kind, token))
}

fn resolve_name<'a>(
    token: &str,
    names: &'a HashMap<String, String>,
    kind: &str,
) -> Result<&'a str, TransportError> {
    let token = token.trim();
    if !token.starts_with('#') {
        return Err(syntax_error(kind, token));
    }
    match names.get(token) {
        Some(name) => Ok(name),
        None => Err(TransportError::validation(format!(
            "An expression attribute name used in the document path is not defined; attribute name: {}",
            token
        ))),
    }
}

fn resolve_value<'a>(
    token: &str,
    values: &'a WireItem,
    kind: &str,
) -> Result<&'a AttrValue, TransportError> {
    let token = token.trim();
    if !token.starts_with(':') {
        return Err(syntax_error(kind, token));
    }
    match values.get(token) {
        Some(value) => Ok(value),
        None => Err(TransportError::validation(format!(
            "An expression attribute value used in expression is not defined; attribute value: {}",
            token
        ))),
    }
}

/// Parse a single `#name = :value` comparison.
fn parse_equality(
    expression: &str,
    names: &HashMap<String, String>,
    values: &WireItem,
    kind: &str,
) -> Result<(String, AttrValue), TransportError> {
    let mut sides = expression.splitn(2, '=');
    let lhs = sides.next().unwrap_or_default();
    let rhs = match sides.next() {
        Some(rhs) => rhs,
        None => return Err(syntax_error(kind, expression.trim())),
    };
    let name = resolve_name(lhs, names, kind)?;
    let value = resolve_value(rhs, values, kind)?;
    Ok((name.to_string(), value.clone()))
}

/// Parse `SET #a = :a, #b = :b, ...` into resolved assignments.
fn parse_assignments(
    expression: &str,
    names: &HashMap<String, String>,
    values: &WireItem,
) -> Result<Vec<(String, AttrValue)>, TransportError> {
    const KIND: &str = "UpdateExpression";
    let body = match expression.strip_prefix("SET ") {
        Some(body) => body,
        None => return Err(syntax_error(KIND, expression.trim())),
    };
    body.split(',')
        .map(|clause| parse_equality(clause, names, values, KIND))
        .collect()
}

/// Parse a `#a,#b,#c` projection into resolved attribute names.
fn parse_projection(
    expression: &str,
    names: &HashMap<String, String>,
) -> Result<Vec<String>, TransportError> {
    const KIND: &str = "ProjectionExpression";
    if expression.trim().is_empty() {
        return Err(syntax_error(KIND, expression));
    }
    expression
        .split(',')
        .map(|token| resolve_name(token, names, KIND).map(str::to_string))
        .collect()
}

fn project(item: &WireItem, attributes: &[String]) -> WireItem {
    attributes
        .iter()
        .filter_map(|name| item.get(name).map(|value| (name.clone(), value.clone())))
        .collect()
}

impl Transport for MemoryTransport {
    fn fetch_item(&self, collection: &str, key: &WireItem) -> Result<FetchReply, TransportError> {
        self.take_injected()?;
        self.with_table(collection, |table| {
            let id = key_fingerprint(table, key)?;
            Ok(FetchReply {
                item: table.items.get(&id).cloned(),
                metadata: Self::metadata(),
            })
        })
    }

    fn put_item(&self, collection: &str, item: &WireItem) -> Result<WriteAck, TransportError> {
        self.take_injected()?;
        self.with_table_mut(collection, |table| {
            let id = item_fingerprint(table, item)?;
            table.items.insert(id, item.clone());
            Ok(WriteAck {
                metadata: Self::metadata(),
            })
        })
    }

    fn batch_put_items(
        &self,
        collection: &str,
        items: &[WireItem],
    ) -> Result<WriteAck, TransportError> {
        self.take_injected()?;
        if items.len() > MAX_BATCH_ITEMS {
            return Err(TransportError::validation(format!(
                "Too many items requested for the BatchWriteItem call: {}",
                items.len()
            )));
        }
        self.with_table_mut(collection, |table| {
            // Validate the whole batch before writing any of it.
            let ids = items
                .iter()
                .map(|item| item_fingerprint(table, item))
                .collect::<Result<Vec<_>, _>>()?;
            let mut seen = std::collections::HashSet::with_capacity(ids.len());
            for id in &ids {
                if !seen.insert(id.as_str()) {
                    return Err(TransportError::validation(
                        "Provided list of item keys contains duplicates",
                    ));
                }
            }
            for (id, item) in ids.into_iter().zip(items) {
                table.items.insert(id, item.clone());
            }
            Ok(WriteAck {
                metadata: Self::metadata(),
            })
        })
    }

    fn update_item(
        &self,
        collection: &str,
        key: &WireItem,
        update_expression: &str,
        names: &HashMap<String, String>,
        values: &WireItem,
    ) -> Result<MutationReply, TransportError> {
        self.take_injected()?;
        let assignments = parse_assignments(update_expression, names, values)?;
        self.with_table_mut(collection, |table| {
            for (attribute, _) in &assignments {
                if *attribute == table.key_attribute {
                    return Err(TransportError::validation(format!(
                        "One or more parameter values were invalid: Cannot update attribute {}. This attribute is part of the key",
                        attribute
                    )));
                }
            }
            let id = key_fingerprint(table, key)?;
            let item = match table.items.get_mut(&id) {
                Some(item) => item,
                None => {
                    return Err(TransportError::condition_failed(
                        "The conditional request failed",
                    ))
                }
            };
            for (attribute, value) in assignments {
                item.insert(attribute, value);
            }
            Ok(MutationReply {
                attributes: item.clone(),
                metadata: Self::metadata(),
            })
        })
    }

    fn delete_item(
        &self,
        collection: &str,
        key: &WireItem,
    ) -> Result<MutationReply, TransportError> {
        self.take_injected()?;
        self.with_table_mut(collection, |table| {
            let id = key_fingerprint(table, key)?;
            match table.items.remove(&id) {
                Some(item) => Ok(MutationReply {
                    attributes: item,
                    metadata: Self::metadata(),
                }),
                None => Err(TransportError::condition_failed(
                    "The conditional request failed",
                )),
            }
        })
    }

    fn query(
        &self,
        collection: &str,
        key_condition: &str,
        names: &HashMap<String, String>,
        values: &WireItem,
    ) -> Result<ItemPage, TransportError> {
        self.take_injected()?;
        let (attribute, value) = parse_equality(key_condition, names, values, "KeyConditionExpression")?;
        self.with_table(collection, |table| {
            if attribute != table.key_attribute {
                return Err(TransportError::validation(format!(
                    "Query condition missed key schema element: {}",
                    table.key_attribute
                )));
            }
            let id = fingerprint(&value);
            let items = table.items.get(&id).cloned().into_iter().collect();
            Ok(ItemPage {
                items,
                metadata: Self::metadata(),
            })
        })
    }

    fn scan(
        &self,
        collection: &str,
        filter: &str,
        names: &HashMap<String, String>,
        values: &WireItem,
        projection: &str,
    ) -> Result<ItemPage, TransportError> {
        self.take_injected()?;
        let (attribute, value) = parse_equality(filter, names, values, "FilterExpression")?;
        let projected = parse_projection(projection, names)?;
        self.with_table(collection, |table| {
            let items = table
                .items
                .values()
                .filter(|item| item.get(&attribute) == Some(&value))
                .map(|item| project(item, &projected))
                .collect();
            Ok(ItemPage {
                items,
                metadata: Self::metadata(),
            })
        })
    }

    fn describe_collection(&self, collection: &str) -> Result<CollectionInfo, TransportError> {
        self.take_injected()?;
        self.with_table(collection, |table| {
            let size_bytes = table
                .items
                .values()
                .map(|item| encode_item(item).to_string().len() as u64)
                .sum();
            Ok(CollectionInfo {
                name: collection.to_string(),
                item_count: table.items.len() as u64,
                size_bytes,
                metadata: Self::metadata(),
            })
        })
    }
}

impl std::fmt::Debug for MemoryTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.inner.tables.read();
        let mut counts = BTreeMap::new();
        for (name, table) in tables.iter() {
            counts.insert(name.clone(), table.items.len());
        }
        f.debug_struct("MemoryTransport")
            .field("collections", &counts)
            .finish()
    }
}
