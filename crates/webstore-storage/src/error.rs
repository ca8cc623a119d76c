//! Storage error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Migration to schema v{version} failed: {reason}")]
    Migration { version: i32, reason: String },

    #[error("Invalid origin: {0}")]
    InvalidOrigin(String),
}
