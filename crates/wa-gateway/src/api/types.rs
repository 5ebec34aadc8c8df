//! API request and response types.

use serde::Serialize;
use serde_json::Value;

/// Body of `POST /send-message`.
///
/// Fields are read leniently from any JSON value: a field that is absent
/// or not a string is `None`. Authorization is checked before presence.
#[derive(Debug, Default)]
pub struct SendMessageRequest {
    /// Shared secret
    pub key: Option<String>,

    /// Destination phone number, loosely formatted
    pub phone: Option<String>,

    /// Text to send
    pub message: Option<String>,
}

impl SendMessageRequest {
    pub fn from_body(body: &Value) -> Self {
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(String::from);

        Self {
            key: field("key"),
            phone: field("phone"),
            message: field("message"),
        }
    }
}

/// Response after a successful send.
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub status: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub session: String,
    pub session_bridge_healthy: bool,
    pub log_store: String,
}
