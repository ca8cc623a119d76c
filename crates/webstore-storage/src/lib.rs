//! WebStore Storage Layer
//!
//! SQLite persistence for the native key/value store on desktop hosts.
//! Entries are scoped by origin, the same way a browser scopes `localStorage`.

mod database;
mod error;
mod migrations;
mod origin;

pub use database::Database;
pub use error::StorageError;
pub use origin::normalize_origin;

pub type Result<T> = std::result::Result<T, StorageError>;
