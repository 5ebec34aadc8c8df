//! HTTP request handlers.

use super::types::{HealthResponse, SendMessageRequest, SendMessageResponse};
use super::AppState;
use crate::error::GatewayError;
use crate::phone::normalize_phone;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::Utc;
use message_log::{LogEntry, SendStatus};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use subtle::ConstantTimeEq;
use tracing::{error, info, warn};
use wa_session::ChatId;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Pairing page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Current pairing code as plain text; empty once the session is ready.
pub async fn pairing_code(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.session.state().pairing_code(),
    )
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let bridge_healthy = state.session.health_check().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        session: state.session.state().current().name().to_string(),
        session_bridge_healthy: bridge_healthy,
        log_store: state.log_store.backend().to_string(),
    })
}

/// Send a text message and log the attempt.
///
/// Requests rejected before normalization succeeds are not logged. Once the
/// destination is valid, exactly one log row is written whatever the outcome.
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SendMessageResponse>, GatewayError> {
    let body = match payload {
        Ok(Json(body)) => body,
        // A non-JSON body carries no key; it is rejected as unauthorized below.
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Null,
        Err(e) => return Err(GatewayError::InvalidBody(e.body_text())),
    };
    let request = SendMessageRequest::from_body(&body);

    authorize(&state.auth_key, request.key.as_deref())?;

    let (phone, message) = match (request.phone, request.message) {
        (Some(phone), Some(message)) if !phone.is_empty() && !message.is_empty() => {
            (phone, message)
        }
        _ => return Err(GatewayError::MissingFields),
    };

    let normalized = normalize_phone(&phone)?;
    let to = ChatId::individual(&normalized);
    let created_at = Utc::now();

    let outcome = state.session.send(&to, &message).await;

    let entry = LogEntry {
        from: state.sender_id.clone(),
        to: to.to_string(),
        message,
        status: if outcome.is_ok() {
            SendStatus::Success
        } else {
            SendStatus::Failed
        },
        created_at,
    };

    if let Err(e) = state.log_store.record(&entry).await {
        error!(to = %to, status = %entry.status, "Failed to log send attempt: {}", e);
        return Err(e.into());
    }

    match outcome {
        Ok(()) => {
            info!(to = %to, "Message sent");
            Ok(Json(SendMessageResponse {
                status: "Message sent successfully".to_string(),
            }))
        }
        Err(e) => {
            error!(to = %to, "Send error: {}", e);
            Err(e.into())
        }
    }
}

/// Compare the provided key with the shared secret in constant time.
fn authorize(expected: &SecretString, provided: Option<&str>) -> Result<(), GatewayError> {
    let provided = provided.unwrap_or_default();
    let matches: bool = expected
        .expose_secret()
        .as_bytes()
        .ct_eq(provided.as_bytes())
        .into();

    if matches {
        Ok(())
    } else {
        warn!("Rejected send request with invalid key");
        Err(GatewayError::Unauthorized)
    }
}
