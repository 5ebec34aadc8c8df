//! Log entry types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Outcome of a send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SendStatus {
    Success,
    Failed,
}

impl SendStatus {
    /// Value stored in the `status` ENUM column.
    pub fn as_str(&self) -> &'static str {
        match self {
            SendStatus::Success => "success",
            SendStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for SendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One send attempt, as written to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Configured sender identifier; `None` is stored as NULL
    pub from: Option<String>,
    /// Destination chat id
    pub to: String,
    pub message: String,
    pub status: SendStatus,
    /// When the request started, before the send was attempted
    pub created_at: DateTime<Utc>,
}

/// A log entry together with the id the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredEntry {
    pub id: u64,
    #[serde(flatten)]
    pub entry: LogEntry,
}

/// Connection settings for the MySQL backend.
#[derive(Debug, Clone)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: secrecy::SecretString,
    /// Database to create if absent and then use
    pub database: String,
}
