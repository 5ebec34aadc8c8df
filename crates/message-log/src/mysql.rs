//! MySQL-backed message log.

use crate::error::LogStoreError;
use crate::types::{DbSettings, LogEntry};
use secrecy::ExposeSecret;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::{ConnectOptions, Connection, Executor};
use tracing::{debug, info, instrument};

/// Same ceiling the mysql2 pool uses by default.
const MAX_CONNECTIONS: u32 = 10;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS message_logs (
    id INT AUTO_INCREMENT PRIMARY KEY,
    `from` VARCHAR(50),
    `to` VARCHAR(50),
    `message` TEXT,
    `status` ENUM('success', 'failed') NOT NULL,
    `created_at` DATETIME
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

const INSERT_ENTRY: &str = r#"
INSERT INTO message_logs (`from`, `to`, `message`, `status`, `created_at`)
VALUES (?, ?, ?, ?, ?)
"#;

/// Message log stored in the `message_logs` table.
#[derive(Clone)]
pub struct MySqlLogStore {
    pool: MySqlPool,
}

impl MySqlLogStore {
    /// Provision the database and table, then return a pooled store.
    ///
    /// Safe to run on every start: both statements are create-if-absent.
    pub async fn connect(settings: &DbSettings) -> Result<Self, LogStoreError> {
        let database = quote_identifier(&settings.database)?;

        let server = MySqlConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .password(settings.password.expose_secret());

        let mut conn = server.connect().await?;
        let create_database = format!("CREATE DATABASE IF NOT EXISTS {}", database);
        (&mut conn).execute(create_database.as_str()).await?;
        conn.close().await?;
        debug!(database = %settings.database, "Database ensured");

        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(server.database(&settings.database))
            .await?;

        (&pool).execute(CREATE_TABLE).await?;
        info!(
            host = %settings.host,
            database = %settings.database,
            "Message log table ready"
        );

        Ok(Self { pool })
    }

    /// Insert one row.
    #[instrument(skip(self, entry), fields(to = %entry.to, status = %entry.status))]
    pub async fn record(&self, entry: &LogEntry) -> Result<(), LogStoreError> {
        sqlx::query(INSERT_ENTRY)
            .bind(entry.from.as_deref())
            .bind(&entry.to)
            .bind(&entry.message)
            .bind(entry.status.as_str())
            .bind(entry.created_at.naive_utc())
            .execute(&self.pool)
            .await?;

        debug!("Send attempt logged");
        Ok(())
    }
}

/// Quote a database name for use in DDL, where placeholders are not allowed.
fn quote_identifier(name: &str) -> Result<String, LogStoreError> {
    if name.is_empty() || name.len() > 64 || name.contains('\0') {
        return Err(LogStoreError::InvalidDatabaseName(name.to_string()));
    }
    Ok(format!("`{}`", name.replace('`', "``")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(
            quote_identifier("whatsapp_gateway").unwrap(),
            "`whatsapp_gateway`"
        );
        assert_eq!(quote_identifier("we`ird").unwrap(), "`we``ird`");
    }

    #[test]
    fn test_quote_identifier_rejects_bad_names() {
        assert!(quote_identifier("").is_err());
        assert!(quote_identifier(&"x".repeat(65)).is_err());
        assert!(quote_identifier("a\0b").is_err());
    }
}
