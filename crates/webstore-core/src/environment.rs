//! Execution environments and the capability check

use std::rc::Rc;

use webstore_cookie::{CookieJar, MemoryCookieJar};
use webstore_storage::Database;

use crate::config::Config;
use crate::error::CoreError;
use crate::native::{NativeStore, SqliteStore};
use crate::Result;

/// The facilities a hosting environment exposes to the accessor.
pub trait Environment {
    /// The native store, or `None` when it is absent or refuses access.
    ///
    /// Must not fail: an unusable store is a normal negative answer.
    fn native_store(&self) -> Option<Rc<dyn NativeStore>>;

    /// The document's cookie jar.
    fn cookie_jar(&self) -> Result<Rc<dyn CookieJar>>;
}

/// Capability check: is the native store usable here?
pub fn has_native_store(env: &dyn Environment) -> bool {
    env.native_store().is_some()
}

/// Environment assembled by a host application out of concrete stores.
pub struct HostEnvironment {
    native: Option<Rc<dyn NativeStore>>,
    cookies: Rc<dyn CookieJar>,
}

impl HostEnvironment {
    pub fn new(native: Option<Rc<dyn NativeStore>>, cookies: Rc<dyn CookieJar>) -> Self {
        Self { native, cookies }
    }

    /// Environment with a native store and an empty cookie jar.
    pub fn with_native(store: impl NativeStore + 'static) -> Self {
        Self::new(Some(Rc::new(store)), Rc::new(MemoryCookieJar::new()))
    }

    /// Environment without a native store, like a private browsing window.
    pub fn cookies_only(jar: impl CookieJar + 'static) -> Self {
        Self::new(None, Rc::new(jar))
    }

    /// Desktop environment: SQLite-backed native store when `database_path`
    /// is configured, cookies only otherwise.
    pub fn from_config(config: &Config) -> Result<Self> {
        let Some(path) = &config.database_path else {
            tracing::debug!("No database configured, native store absent");
            return Ok(Self::cookies_only(MemoryCookieJar::new()));
        };

        let origin = config
            .origin
            .as_deref()
            .ok_or_else(|| CoreError::Config("database_path requires an origin".to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(path)?;
        let store = SqliteStore::new(db, origin)?;
        tracing::debug!(path = %path.display(), origin = store.origin(), "Opened native store");

        Ok(Self::with_native(store))
    }
}

impl Environment for HostEnvironment {
    fn native_store(&self) -> Option<Rc<dyn NativeStore>> {
        self.native.clone()
    }

    fn cookie_jar(&self) -> Result<Rc<dyn CookieJar>> {
        Ok(Rc::clone(&self.cookies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::MemoryStore;

    #[test]
    fn test_capability_check() {
        assert!(has_native_store(&HostEnvironment::with_native(MemoryStore::new())));
        assert!(!has_native_store(&HostEnvironment::cookies_only(
            MemoryCookieJar::new()
        )));
    }

    #[test]
    fn test_from_config_without_database() {
        let env = HostEnvironment::from_config(&Config::default()).unwrap();
        assert!(!has_native_store(&env));
    }

    #[test]
    fn test_from_config_requires_origin() {
        let config = Config {
            database_path: Some(std::env::temp_dir().join("unused.db")),
            ..Config::default()
        };
        assert!(matches!(
            HostEnvironment::from_config(&config),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_from_config_with_database() {
        let dir = std::env::temp_dir().join(format!("webstore-{}", uuid::Uuid::new_v4()));
        let config = Config::for_origin("https://example.com", &dir);

        let env = HostEnvironment::from_config(&config).unwrap();
        assert!(has_native_store(&env));

        let store = env.native_store().unwrap();
        store.set_item("theme", "dark").unwrap();
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("dark"));

        drop(store);
        drop(env);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
