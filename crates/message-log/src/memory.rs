//! In-memory message log implementation.

use crate::error::LogStoreError;
use crate::types::{LogEntry, StoredEntry};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Message log kept in process memory. Rows are lost on restart.
#[derive(Clone, Default)]
pub struct MemoryLogStore {
    entries: Arc<RwLock<Vec<StoredEntry>>>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row with the next id.
    pub async fn record(&self, entry: &LogEntry) -> Result<(), LogStoreError> {
        let mut entries = self.entries.write().await;
        let id = entries.len() as u64 + 1;
        entries.push(StoredEntry {
            id,
            entry: entry.clone(),
        });
        debug!(id, to = %entry.to, status = %entry.status, "Send attempt logged in memory");
        Ok(())
    }

    /// All rows in insertion order.
    pub async fn entries(&self) -> Vec<StoredEntry> {
        self.entries.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}
