//! The admin handler: one entry point, eight table operations.

use std::collections::HashMap;
use std::sync::Arc;

use attrstore_client::{Collection, Transport, MAX_BATCH_ITEMS};
use attrstore_core::{item, Item, Value};
use attrstore_wire::plain::item_to_json;
use attrstore_wire::{AttrValue, WireItem};
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

use crate::envelope::ResponseEnvelope;
use crate::fixtures::FakeUsers;
use crate::operation::Operation;
use crate::request::AdminRequest;

/// Dispatches admin requests to the matching store operation.
///
/// Every request answers with a [`ResponseEnvelope`]; malformed input and
/// store failures come back as status 400 bodies, never as panics.
pub struct AdminHandler<T: Transport> {
    store: Arc<Collection<T>>,
}

impl<T: Transport> AdminHandler<T> {
    /// A handler over a shared collection.
    pub fn new(store: Arc<Collection<T>>) -> Self {
        Self { store }
    }

    /// Route one request by its `operation` field.
    pub fn handle(&self, request: &AdminRequest) -> ResponseEnvelope {
        let token = match request.operation.as_deref() {
            Some(token) => token,
            None => return ResponseEnvelope::bad_request_message("Missing operation parameter"),
        };
        let operation = match Operation::parse(token) {
            Some(operation) => operation,
            None => return ResponseEnvelope::bad_request_message("Invalid operation parameter"),
        };
        info!("admin operation {}", operation);

        match operation {
            Operation::PutItem => self.put_item(request),
            Operation::BatchWriteItem => self.batch_write(request),
            Operation::GetItem => self.get_item(request),
            Operation::UpdateItem => self.update_item(request),
            Operation::QueryItems => self.query_items(request),
            Operation::DeleteItem => self.delete_item(request),
            Operation::ScanItems => self.scan_items(request),
            Operation::ItemCount => self.item_count(),
        }
    }

    /// Store one user record under a fresh id.
    ///
    /// Absent profile fields are stored as explicit nulls, not dropped.
    fn put_item(&self, request: &AdminRequest) -> ResponseEnvelope {
        let user = item([
            ("_id", Value::from(Uuid::new_v4().to_string())),
            ("Name", optional(&request.name)),
            ("Address", optional(&request.address)),
            ("Email", optional(&request.email)),
            ("Phone", optional(&request.phone)),
        ]);

        match self.store.insert(&user) {
            Ok(_) => ResponseEnvelope::ok(json!({ "message": "Item added successfully" })),
            Err(_) => {
                ResponseEnvelope::bad_request_message("Failed to add item, see logs for details.")
            }
        }
    }

    /// Generate `userCount` synthetic users and store them in batches of 25.
    ///
    /// Writes stop at the first failing batch; the response always reports
    /// the records that made it in, so a failure after three full batches
    /// still lists 75 users.
    fn batch_write(&self, request: &AdminRequest) -> ResponseEnvelope {
        let user_count = request.user_count.unwrap_or(0) as usize;
        debug!("generating {} synthetic users", user_count);
        let users = FakeUsers::new().users(user_count);

        let mut written: Vec<&Item> = Vec::with_capacity(users.len());
        let mut status_code = 200;
        for batch in users.chunks(MAX_BATCH_ITEMS) {
            if self.store.batch_insert(batch).is_err() {
                status_code = 400;
                break;
            }
            written.extend(batch);
        }

        let users_written: Vec<_> = written.into_iter().map(item_to_json).collect();
        ResponseEnvelope::new(
            status_code,
            json!({ "userCount": user_count, "usersWritten": users_written }),
        )
    }

    /// Fetch one record by id.
    fn get_item(&self, request: &AdminRequest) -> ResponseEnvelope {
        let id = match request.id.as_deref() {
            Some(id) => id,
            None => return ResponseEnvelope::bad_request_message("Missing id parameter"),
        };

        match self.store.fetch_by_key(&user_key(id)) {
            Ok(found) if found.is_empty() => {
                ResponseEnvelope::ok(json!({ "item": "No matching item found" }))
            }
            Ok(found) => ResponseEnvelope::ok(json!({ "item": item_to_json(&found) })),
            Err(_) => {
                ResponseEnvelope::bad_request_message("Failed to get item, see logs for details.")
            }
        }
    }

    /// Overwrite the `Name` attribute of an existing record.
    ///
    /// The record is fetched first; an unknown id answers 400 without
    /// touching the store. When the request carries no name the attribute
    /// is set to `"NA"`.
    fn update_item(&self, request: &AdminRequest) -> ResponseEnvelope {
        let id = match request.id.as_deref() {
            Some(id) => id,
            None => return ResponseEnvelope::bad_request_message("Missing id parameter"),
        };
        let name = request.name.as_deref().unwrap_or("NA");
        let key = user_key(id);

        match self.store.fetch_by_key(&key) {
            Ok(existing) if existing.is_empty() => {
                return ResponseEnvelope::bad_request_message("No matching item found");
            }
            Ok(_) => {}
            Err(_) => {
                return ResponseEnvelope::bad_request_message(
                    "Failed to update item, see logs for details.",
                );
            }
        }

        let names = HashMap::from([("#Name".to_string(), "Name".to_string())]);
        let values = WireItem::from([(":Name".to_string(), AttrValue::string(name))]);
        match self
            .store
            .conditional_update(&key, "SET #Name = :Name", &names, &values)
        {
            Ok(updated) => ResponseEnvelope::ok(json!({
                "message": "Item updated successfully",
                "updatedItem": item_to_json(&updated),
            })),
            Err(_) => ResponseEnvelope::bad_request_message(
                "Failed to update item, see logs for details.",
            ),
        }
    }

    /// Query records whose key equals the given id.
    fn query_items(&self, request: &AdminRequest) -> ResponseEnvelope {
        let id = match request.id.as_deref() {
            Some(id) => id,
            None => return ResponseEnvelope::bad_request_message("Missing id parameter"),
        };

        let names = HashMap::from([("#id".to_string(), "_id".to_string())]);
        let values = WireItem::from([(":_id".to_string(), AttrValue::string(id))]);
        match self.store.query_by_key("#id = :_id", &names, &values) {
            Ok(items) => ResponseEnvelope::ok(json!({ "items": items_to_json(&items) })),
            Err(_) => ResponseEnvelope::bad_request_message(
                "Failed to query items, see logs for details.",
            ),
        }
    }

    /// Delete one record by id.
    ///
    /// Same pre-check as [`Self::update_item`]: an unknown id answers 400
    /// before the delete is attempted.
    fn delete_item(&self, request: &AdminRequest) -> ResponseEnvelope {
        let id = match request.id.as_deref() {
            Some(id) => id,
            None => return ResponseEnvelope::bad_request_message("Missing id parameter"),
        };
        let key = user_key(id);

        match self.store.fetch_by_key(&key) {
            Ok(existing) if existing.is_empty() => {
                return ResponseEnvelope::bad_request_message("No matching item found");
            }
            Ok(_) => {}
            Err(_) => {
                return ResponseEnvelope::bad_request_message(
                    "Failed to delete item, see logs for details.",
                );
            }
        }

        match self.store.delete(&key) {
            Ok(deleted) => ResponseEnvelope::ok(json!({
                "message": "Item deleted successfully",
                "deletedItem": item_to_json(&deleted),
            })),
            Err(_) => ResponseEnvelope::bad_request_message(
                "Failed to delete item, see logs for details.",
            ),
        }
    }

    /// Scan for records matching the id, projecting the profile attributes.
    fn scan_items(&self, request: &AdminRequest) -> ResponseEnvelope {
        let id = match request.id.as_deref() {
            Some(id) => id,
            None => return ResponseEnvelope::bad_request_message("Missing id parameter"),
        };

        let names = HashMap::from([
            ("#id".to_string(), "_id".to_string()),
            ("#name".to_string(), "Name".to_string()),
            ("#email".to_string(), "Email".to_string()),
            ("#address".to_string(), "Address".to_string()),
            ("#phone".to_string(), "Phone".to_string()),
        ]);
        let values = WireItem::from([(":_id".to_string(), AttrValue::string(id))]);
        match self.store.scan_with_filter(
            "#id = :_id",
            &names,
            &values,
            "#id,#name,#email,#address,#phone",
        ) {
            Ok(items) => ResponseEnvelope::ok(json!({ "items": items_to_json(&items) })),
            Err(_) => ResponseEnvelope::bad_request(json!({ "items": "No items found." })),
        }
    }

    /// Report how many records the collection holds.
    fn item_count(&self) -> ResponseEnvelope {
        match self.store.count() {
            Ok(count) => ResponseEnvelope::ok(json!({ "itemCount": count })),
            Err(_) => ResponseEnvelope::bad_request(
                json!({ "itemCount": "Failed to get item count, see logs for details." }),
            ),
        }
    }
}

fn user_key(id: &str) -> WireItem {
    WireItem::from([("_id".to_string(), AttrValue::string(id))])
}

fn optional(field: &Option<String>) -> Value {
    match field {
        Some(text) => Value::from(text.as_str()),
        None => Value::Null,
    }
}

fn items_to_json(items: &[Item]) -> serde_json::Value {
    serde_json::Value::Array(items.iter().map(item_to_json).collect())
}
