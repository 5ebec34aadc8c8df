//! Storage backend selection.

use crate::error::LogStoreError;
use crate::memory::MemoryLogStore;
use crate::mysql::MySqlLogStore;
use crate::types::{DbSettings, LogEntry};
use tracing::warn;

/// Message log that works with or without a database.
#[derive(Clone)]
pub enum MessageLogStore {
    /// Durable MySQL table
    MySql(MySqlLogStore),
    /// In-memory only (no persistence)
    Memory(MemoryLogStore),
}

impl MessageLogStore {
    /// Provision and connect the MySQL backend.
    pub async fn mysql(settings: &DbSettings) -> Result<Self, LogStoreError> {
        Ok(MessageLogStore::MySql(MySqlLogStore::connect(settings).await?))
    }

    /// Force memory store.
    pub fn memory() -> Self {
        warn!("Using in-memory message log (rows will be lost on restart)");
        MessageLogStore::Memory(MemoryLogStore::new())
    }

    /// Append one send attempt.
    pub async fn record(&self, entry: &LogEntry) -> Result<(), LogStoreError> {
        match self {
            MessageLogStore::MySql(s) => s.record(entry).await,
            MessageLogStore::Memory(s) => s.record(entry).await,
        }
    }

    /// Name of the active backend.
    pub fn backend(&self) -> &'static str {
        match self {
            MessageLogStore::MySql(_) => "mysql",
            MessageLogStore::Memory(_) => "memory",
        }
    }
}

impl From<MemoryLogStore> for MessageLogStore {
    fn from(store: MemoryLogStore) -> Self {
        MessageLogStore::Memory(store)
    }
}
