//! Append-only log of message send attempts.
//!
//! Every attempt that reaches the messaging session is written exactly once,
//! whatever its outcome. Rows are never updated or deleted.

mod error;
mod memory;
mod mysql;
mod store;
mod types;

pub use error::LogStoreError;
pub use memory::MemoryLogStore;
pub use mysql::MySqlLogStore;
pub use store::MessageLogStore;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_send_status_serialization() {
        let json = serde_json::to_string(&SendStatus::Success).unwrap();
        assert_eq!(json, "\"success\"");

        let json = serde_json::to_string(&SendStatus::Failed).unwrap();
        assert_eq!(json, "\"failed\"");
    }

    #[test]
    fn test_send_status_column_value() {
        assert_eq!(SendStatus::Success.as_str(), "success");
        assert_eq!(SendStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn test_stored_entry_serialization_is_flat() {
        let stored = StoredEntry {
            id: 7,
            entry: LogEntry {
                from: None,
                to: "6281234567890@c.us".into(),
                message: "hi".into(),
                status: SendStatus::Success,
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            },
        };

        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["to"], "6281234567890@c.us");
        assert_eq!(json["status"], "success");
        assert!(json["from"].is_null());
    }

    #[tokio::test]
    async fn test_memory_backend_through_enum() {
        let memory = MemoryLogStore::new();
        let store = MessageLogStore::from(memory.clone());
        assert_eq!(store.backend(), "memory");

        store
            .record(&LogEntry {
                from: Some("sender".into()),
                to: "6281234567890@c.us".into(),
                message: "hi".into(),
                status: SendStatus::Failed,
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        assert_eq!(memory.count().await, 1);
    }
}
