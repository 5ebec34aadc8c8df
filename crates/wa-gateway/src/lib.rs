//! WhatsApp message gateway.
//!
//! Exposes one protected endpoint that sends a text message through a
//! WhatsApp Web session and logs every attempt, plus a page for pairing
//! the session by QR code.

pub mod api;
pub mod config;
pub mod error;
pub mod phone;

pub use config::Config;
pub use error::GatewayError;
pub use phone::{normalize_phone, PhoneError};
