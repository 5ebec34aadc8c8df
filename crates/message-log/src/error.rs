//! Message log errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogStoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid database name: {0}")]
    InvalidDatabaseName(String),
}
