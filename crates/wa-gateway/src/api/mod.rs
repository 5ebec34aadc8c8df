//! HTTP API for the gateway.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use message_log::MessageLogStore;
use secrecy::SecretString;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use wa_session::SessionClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Shared secret for the send endpoint
    pub auth_key: SecretString,
    /// Value logged in the `from` column
    pub sender_id: Option<String>,
    /// Messaging session, including its pairing state
    pub session: Arc<SessionClient>,
    /// Send attempt log
    pub log_store: Arc<MessageLogStore>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        auth_key: SecretString,
        sender_id: Option<String>,
        session: SessionClient,
        log_store: MessageLogStore,
    ) -> Self {
        Self {
            auth_key,
            sender_id,
            session: Arc::new(session),
            log_store: Arc::new(log_store),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/qr", get(handlers::pairing_code))
        .route("/send-message", post(handlers::send_message))
        .route("/health", get(handlers::health))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
