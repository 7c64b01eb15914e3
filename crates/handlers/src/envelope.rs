//! HTTP-like response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The structured outcome every handler answers with.
///
/// Mirrors the gateway reply shape of the original deployment: a status
/// indicator, a base64 flag (always false here, nothing binary is returned),
/// and a JSON body. The body's shape varies per operation; see the handler
/// docs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// HTTP-like status code.
    pub status_code: u16,
    /// Whether `body` is base64-encoded. Always false.
    pub is_base64_encoded: bool,
    /// Operation-specific JSON body.
    pub body: Value,
}

impl ResponseEnvelope {
    /// An envelope with an explicit status.
    pub fn new(status_code: u16, body: Value) -> Self {
        Self {
            status_code,
            is_base64_encoded: false,
            body,
        }
    }

    /// A 200 envelope.
    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    /// A 400 envelope.
    pub fn bad_request(body: Value) -> Self {
        Self::new(400, body)
    }

    /// A 400 envelope whose body is `{"message": ...}`.
    pub fn bad_request_message(message: &str) -> Self {
        Self::bad_request(json!({ "message": message }))
    }

    /// Whether this envelope reports success.
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }
}
