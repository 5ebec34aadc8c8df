//! WhatsApp Web session bridge client.
//!
//! The headless browser session lives in a separate bridge process. This
//! crate sends messages through it and tracks its pairing lifecycle.

mod client;
mod error;
mod state;
mod types;
mod watcher;

pub use client::SessionClient;
pub use error::SessionError;
pub use state::{Lifecycle, SessionState};
pub use types::*;
pub use watcher::SessionWatcher;
