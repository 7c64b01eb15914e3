//! Admin operation dispatch.

use std::fmt;

/// The eight pass-through store operations the admin handler accepts.
///
/// Request payloads name them in camelCase (`"putItem"`, `"itemCount"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Insert one caller-described record.
    PutItem,
    /// Generate and insert a batch of fake records.
    BatchWriteItem,
    /// Fetch one record by id.
    GetItem,
    /// Rename one record.
    UpdateItem,
    /// Key-condition query by id.
    QueryItems,
    /// Delete one record by id.
    DeleteItem,
    /// Filtered, projected scan by id.
    ScanItems,
    /// Collection item count.
    ItemCount,
}

impl Operation {
    /// All operations, in dispatch order.
    pub const ALL: [Operation; 8] = [
        Operation::PutItem,
        Operation::BatchWriteItem,
        Operation::GetItem,
        Operation::UpdateItem,
        Operation::QueryItems,
        Operation::DeleteItem,
        Operation::ScanItems,
        Operation::ItemCount,
    ];

    /// Parse a request token. Tokens are exact; no case folding.
    pub fn parse(token: &str) -> Option<Operation> {
        match token {
            "putItem" => Some(Operation::PutItem),
            "batchWriteItem" => Some(Operation::BatchWriteItem),
            "getItem" => Some(Operation::GetItem),
            "updateItem" => Some(Operation::UpdateItem),
            "queryItems" => Some(Operation::QueryItems),
            "deleteItem" => Some(Operation::DeleteItem),
            "scanItems" => Some(Operation::ScanItems),
            "itemCount" => Some(Operation::ItemCount),
            _ => None,
        }
    }

    /// The request token naming this operation.
    pub fn token(&self) -> &'static str {
        match self {
            Operation::PutItem => "putItem",
            Operation::BatchWriteItem => "batchWriteItem",
            Operation::GetItem => "getItem",
            Operation::UpdateItem => "updateItem",
            Operation::QueryItems => "queryItems",
            Operation::DeleteItem => "deleteItem",
            Operation::ScanItems => "scanItems",
            Operation::ItemCount => "itemCount",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
