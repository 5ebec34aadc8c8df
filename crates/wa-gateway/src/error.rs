//! Error types for the gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Gateway error types.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Phone and message are required")]
    MissingFields,

    #[error("Invalid phone number: {0}")]
    InvalidPhone(#[from] crate::phone::PhoneError),

    /// Session not ready or the transport rejected the message.
    #[error("Failed to send message: {0}")]
    SendFailed(String),

    #[error("Failed to record message: {0}")]
    Storage(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl GatewayError {
    fn parts(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            GatewayError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
            GatewayError::InvalidBody(d) => {
                (StatusCode::BAD_REQUEST, "Invalid request body", Some(d.clone()))
            }
            GatewayError::MissingFields => {
                (StatusCode::BAD_REQUEST, "Phone and message are required", None)
            }
            GatewayError::InvalidPhone(e) => {
                (StatusCode::BAD_REQUEST, "Invalid phone number", Some(e.to_string()))
            }
            GatewayError::SendFailed(d) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to send message",
                Some(d.clone()),
            ),
            GatewayError::Storage(d) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to record message",
                Some(d.clone()),
            ),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error, details) = self.parts();

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<wa_session::SessionError> for GatewayError {
    fn from(e: wa_session::SessionError) -> Self {
        GatewayError::SendFailed(e.to_string())
    }
}

impl From<message_log::LogStoreError> for GatewayError {
    fn from(e: message_log::LogStoreError) -> Self {
        GatewayError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: GatewayError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_unauthorized_has_no_details() {
        let (status, json) = body_json(GatewayError::Unauthorized).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, serde_json::json!({ "error": "Unauthorized" }));
    }

    #[tokio::test]
    async fn test_send_failure_carries_cause() {
        let (status, json) =
            body_json(GatewayError::from(wa_session::SessionError::NotReady)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to send message");
        assert_eq!(json["details"], "Client not ready");
    }

    #[tokio::test]
    async fn test_invalid_phone_details() {
        let err = crate::phone::normalize_phone("123").unwrap_err();
        let (status, json) = body_json(GatewayError::from(err)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid phone number");
        assert_eq!(json["details"], "Invalid phone number format");
    }
}
