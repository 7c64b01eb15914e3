//! Transport reply types.
//!
//! Every engine reply carries a [`ResponseMetadata`] block; the per-operation
//! reply types wrap it together with whatever payload the operation returns.

use attrstore_wire::WireItem;

/// Metadata the engine attaches to every reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMetadata {
    /// HTTP-like status indicator reported by the engine.
    pub status: u16,
    /// Engine-assigned request identifier, for log correlation.
    pub request_id: String,
}

impl ResponseMetadata {
    /// Metadata for a successful call.
    pub fn ok(request_id: impl Into<String>) -> Self {
        Self {
            status: 200,
            request_id: request_id.into(),
        }
    }
}

/// Reply to a single-item fetch. `item` is `None` when the key is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchReply {
    /// The stored item, if one matched the key.
    pub item: Option<WireItem>,
    /// Engine reply metadata.
    pub metadata: ResponseMetadata,
}

/// Acknowledgment of a write-style call (insert, batch insert).
#[derive(Debug, Clone, PartialEq)]
pub struct WriteAck {
    /// Engine reply metadata.
    pub metadata: ResponseMetadata,
}

/// Reply to an update or delete: the item image the caller asked for.
///
/// Updates return the new image; deletes return the pre-delete image.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationReply {
    /// The returned item image.
    pub attributes: WireItem,
    /// Engine reply metadata.
    pub metadata: ResponseMetadata,
}

/// One page of query or scan results. No pagination token is carried;
/// callers get the single page the engine returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPage {
    /// Matching items, in engine order.
    pub items: Vec<WireItem>,
    /// Engine reply metadata.
    pub metadata: ResponseMetadata,
}

/// Collection-level metadata from `describe_collection`.
///
/// `item_count` is whatever the engine last recorded; real engines refresh
/// it periodically, so it may lag the live count.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionInfo {
    /// Collection name.
    pub name: String,
    /// Last-reported item count.
    pub item_count: u64,
    /// Last-reported storage size in bytes.
    pub size_bytes: u64,
    /// Engine reply metadata.
    pub metadata: ResponseMetadata,
}
