//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] webstore_storage::StorageError),

    #[error("Cookie error: {0}")]
    Cookie(#[from] webstore_cookie::CookieError),

    #[error("Quota of {limit} bytes exceeded while writing {key:?}")]
    QuotaExceeded { key: String, limit: usize },

    #[error("Native store is disabled")]
    Disabled,

    #[error("{0} is not available in this environment")]
    Unavailable(String),

    #[error("Environment call failed: {0}")]
    Environment(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
