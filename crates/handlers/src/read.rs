//! The user lookup handler.

use std::sync::Arc;

use attrstore_client::{Collection, Transport};
use attrstore_wire::plain::item_to_json;
use attrstore_wire::{AttrValue, WireItem};
use serde_json::json;
use tracing::info;

use crate::envelope::ResponseEnvelope;

/// Answers "get one user by id" requests.
pub struct ReadHandler<T: Transport> {
    store: Arc<Collection<T>>,
}

impl<T: Transport> ReadHandler<T> {
    /// A handler over a shared collection.
    pub fn new(store: Arc<Collection<T>>) -> Self {
        Self { store }
    }

    /// Look up one user.
    ///
    /// Answers 200 with `{"item": <record>}`, or 200 with
    /// `{"item": "No matching item found"}` when the id is unknown. A
    /// missing id or a store failure answers 400; this handler never
    /// panics.
    pub fn get_user(&self, user_id: Option<&str>) -> ResponseEnvelope {
        let user_id = match user_id {
            Some(id) => id,
            None => return ResponseEnvelope::bad_request_message("Missing user_id parameter"),
        };
        info!("looking up user {}", user_id);

        match self.store.fetch_by_key(&user_key(user_id)) {
            Ok(item) if item.is_empty() => {
                ResponseEnvelope::ok(json!({ "item": "No matching item found" }))
            }
            Ok(item) => ResponseEnvelope::ok(json!({ "item": item_to_json(&item) })),
            Err(_) => {
                ResponseEnvelope::bad_request_message("Failed to get item, see logs for details.")
            }
        }
    }
}

fn user_key(id: &str) -> WireItem {
    WireItem::from([("_id".to_string(), AttrValue::string(id))])
}
