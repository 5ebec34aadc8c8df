//! Session bridge wire types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix the messaging network uses for one-to-one chats.
pub const INDIVIDUAL_CHAT_SUFFIX: &str = "@c.us";

/// Lifecycle phase reported by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgePhase {
    /// Waiting for a pairing code to be scanned
    Qr,
    /// Pairing accepted, session still loading
    Authenticated,
    /// Session usable for sending
    Ready,
    /// Session lost; a new pairing code will follow
    Disconnected,
}

/// Response of `GET /v1/session`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionStatus {
    pub state: BridgePhase,
    #[serde(default)]
    pub qr: Option<String>,
}

/// Outgoing message request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub chat_id: String,
    pub text: String,
}

/// Lifecycle signal emitted by the messaging session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new pairing code is available for out-of-band authentication.
    PairingCode(String),
    Authenticated,
    Ready,
    Disconnected,
}

impl SessionEvent {
    /// Translate a bridge status snapshot into a lifecycle signal.
    ///
    /// A `qr` phase without a code yields nothing: there is nothing to show yet.
    pub fn from_status(status: &SessionStatus) -> Option<Self> {
        match status.state {
            BridgePhase::Qr => status
                .qr
                .as_ref()
                .filter(|code| !code.is_empty())
                .map(|code| SessionEvent::PairingCode(code.clone())),
            BridgePhase::Authenticated => Some(SessionEvent::Authenticated),
            BridgePhase::Ready => Some(SessionEvent::Ready),
            BridgePhase::Disconnected => Some(SessionEvent::Disconnected),
        }
    }
}

/// Destination identifier understood by the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatId(String);

impl ChatId {
    /// Address a one-to-one chat with an already normalized phone number.
    pub fn individual(phone: &str) -> Self {
        Self(format!("{}{}", phone, INDIVIDUAL_CHAT_SUFFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
