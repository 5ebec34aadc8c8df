//! Session bridge HTTP client.

use crate::error::SessionError;
use crate::state::SessionState;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client for the bridge process that hosts the WhatsApp Web session.
#[derive(Clone)]
pub struct SessionClient {
    client: Client,
    base_url: String,
    state: SessionState,
}

impl SessionClient {
    /// Create a new session client reporting into `state`.
    pub fn new(base_url: impl Into<String>, state: SessionState) -> Result<Self, SessionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            state,
        })
    }

    /// Shared lifecycle state of this session.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether the session can send right now.
    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Check if the bridge is reachable.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/v1/health", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Fetch the bridge's current session status.
    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<SessionStatus, SessionError> {
        let response = self
            .client
            .get(format!("{}/v1/session", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(SessionError::Api(msg));
        }

        Ok(response.json().await?)
    }

    /// Send a text message to a chat.
    ///
    /// Fails fast with [`SessionError::NotReady`] when the session has not
    /// reached the ready state.
    #[instrument(skip(self, chat_id, text), fields(chat_id = %chat_id))]
    pub async fn send(&self, chat_id: &ChatId, text: &str) -> Result<(), SessionError> {
        if !self.is_ready() {
            return Err(SessionError::NotReady);
        }

        let request = SendMessageRequest {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            warn!("Send failed: {}", msg);
            return Err(SessionError::SendFailed(msg));
        }

        debug!("Sent message to {}", chat_id);
        Ok(())
    }
}
