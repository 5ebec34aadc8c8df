//! Session lifecycle state shared between the watcher and request handlers.

use crate::types::SessionEvent;
use std::sync::Arc;
use tokio::sync::watch;

/// Where the messaging session is in its pairing lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lifecycle {
    /// Not linked to an account. `code` is empty until the first pairing code arrives.
    Unauthenticated { code: String },
    /// Pairing accepted; the last code stays visible until the session is ready.
    Authenticating { code: String },
    Ready,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Lifecycle::Unauthenticated {
            code: String::new(),
        }
    }
}

impl Lifecycle {
    /// Compute the state that follows `event`.
    pub fn apply(&self, event: &SessionEvent) -> Lifecycle {
        match event {
            SessionEvent::PairingCode(code) => Lifecycle::Unauthenticated { code: code.clone() },
            SessionEvent::Authenticated => Lifecycle::Authenticating {
                code: self.pairing_code().to_string(),
            },
            SessionEvent::Ready => Lifecycle::Ready,
            SessionEvent::Disconnected => Lifecycle::default(),
        }
    }

    /// The pairing code to display, or an empty string.
    pub fn pairing_code(&self) -> &str {
        match self {
            Lifecycle::Unauthenticated { code } | Lifecycle::Authenticating { code } => code,
            Lifecycle::Ready => "",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Lifecycle::Ready)
    }

    /// Short name for health reports and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Lifecycle::Unauthenticated { .. } => "unauthenticated",
            Lifecycle::Authenticating { .. } => "authenticating",
            Lifecycle::Ready => "ready",
        }
    }
}

/// Observable session state.
///
/// Cloning shares the same underlying value. Only the session watcher is
/// expected to call [`SessionState::apply`]; everyone else reads snapshots.
#[derive(Clone, Debug)]
pub struct SessionState {
    tx: Arc<watch::Sender<Lifecycle>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Lifecycle::default());
        Self { tx: Arc::new(tx) }
    }

    /// Apply a lifecycle signal. Returns `true` if the state changed.
    pub fn apply(&self, event: &SessionEvent) -> bool {
        self.tx.send_if_modified(|current| {
            let next = current.apply(event);
            if next == *current {
                false
            } else {
                *current = next;
                true
            }
        })
    }

    /// Snapshot of the current lifecycle.
    pub fn current(&self) -> Lifecycle {
        self.tx.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.tx.borrow().is_ready()
    }

    pub fn pairing_code(&self) -> String {
        self.tx.borrow().pairing_code().to_string()
    }

    /// Receive a notification on every change.
    pub fn subscribe(&self) -> watch::Receiver<Lifecycle> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_unauthenticated_without_code() {
        let state = SessionState::new();
        assert_eq!(state.current(), Lifecycle::default());
        assert_eq!(state.pairing_code(), "");
        assert!(!state.is_ready());
    }

    #[test]
    fn test_pairing_code_then_ready_clears_code() {
        let state = SessionState::new();

        state.apply(&SessionEvent::PairingCode("2@abc".into()));
        assert_eq!(state.pairing_code(), "2@abc");

        state.apply(&SessionEvent::Authenticated);
        assert_eq!(state.current().name(), "authenticating");
        assert_eq!(state.pairing_code(), "2@abc");
        assert!(!state.is_ready());

        state.apply(&SessionEvent::Ready);
        assert!(state.is_ready());
        assert_eq!(state.pairing_code(), "");
    }

    #[test]
    fn test_new_code_replaces_old_one() {
        let state = SessionState::new();
        state.apply(&SessionEvent::PairingCode("first".into()));
        state.apply(&SessionEvent::PairingCode("second".into()));
        assert_eq!(state.pairing_code(), "second");
    }

    #[test]
    fn test_disconnect_drops_readiness() {
        let state = SessionState::new();
        state.apply(&SessionEvent::Ready);
        assert!(state.is_ready());

        state.apply(&SessionEvent::Disconnected);
        assert!(!state.is_ready());
        assert_eq!(state.pairing_code(), "");
    }

    #[test]
    fn test_apply_reports_changes_only() {
        let state = SessionState::new();
        assert!(state.apply(&SessionEvent::Ready));
        assert!(!state.apply(&SessionEvent::Ready));
    }

    #[tokio::test]
    async fn test_subscribers_see_updates() {
        let state = SessionState::new();
        let mut rx = state.subscribe();

        state.apply(&SessionEvent::PairingCode("xyz".into()));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().pairing_code(), "xyz");
    }

    #[test]
    fn test_clones_share_state() {
        let writer = SessionState::new();
        let reader = writer.clone();

        writer.apply(&SessionEvent::Ready);
        assert!(reader.is_ready());
    }
}
