//! Session bridge errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bridge error: {0}")]
    Api(String),

    #[error("Client not ready")]
    NotReady,

    #[error("Send failed: {0}")]
    SendFailed(String),
}
