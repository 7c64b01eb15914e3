//! Admin request payload.

use serde::Deserialize;

/// The free-form admin request, one field per thing any operation needs.
///
/// Every field is optional; each operation validates the ones it uses and
/// answers 400 when a required one is missing. `userCount` arrives in
/// camelCase, like the operation tokens.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminRequest {
    /// Operation token, e.g. `"putItem"`.
    pub operation: Option<String>,
    /// Record id for the single-record operations.
    pub id: Option<String>,
    /// Record name for put/update.
    pub name: Option<String>,
    /// Record address for put.
    pub address: Option<String>,
    /// Record email for put.
    pub email: Option<String>,
    /// Record phone for put.
    pub phone: Option<String>,
    /// Number of fake records for batch insert.
    pub user_count: Option<u32>,
}

impl AdminRequest {
    /// A request carrying only an operation token.
    pub fn operation(token: &str) -> Self {
        Self {
            operation: Some(token.to_string()),
            ..Self::default()
        }
    }
}
