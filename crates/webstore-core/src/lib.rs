//! WebStore Core
//!
//! String key/value persistence for web content. Values go to the
//! environment's native store when it is usable and to the document's cookie
//! header when it is not. The backend is chosen once, when the
//! `StorageAccessor` is built, and consumers receive the accessor (or any
//! other `KeyValueStore`) by injection.

mod accessor;
mod backend;
mod config;
mod environment;
mod error;
mod native;
#[cfg(feature = "web")]
mod web;

pub use accessor::{install, StorageAccessor};
pub use backend::{Backend, BackendKind, CookieBackend, KeyValueStore, NativeBackend};
pub use config::{BackendPreference, Config};
pub use environment::{has_native_store, Environment, HostEnvironment};
pub use error::CoreError;
pub use native::{MemoryStore, NativeStore, SqliteStore};
#[cfg(feature = "web")]
pub use web::{BrowserCookieJar, BrowserEnvironment, BrowserLocalStorage};

pub use webstore_cookie::{CookieEncoding, CookieError, CookieJar, MemoryCookieJar};
pub use webstore_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
