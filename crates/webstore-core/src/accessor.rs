//! Storage accessor
//!
//! The facade consumers talk to. The capability check runs once in
//! `StorageAccessor::new`; every later call goes straight to the chosen backend.

use crate::backend::{Backend, BackendKind, CookieBackend, KeyValueStore, NativeBackend};
use crate::config::{BackendPreference, Config};
use crate::environment::Environment;
use crate::error::CoreError;
use crate::Result;

pub struct StorageAccessor {
    backend: Backend,
}

impl StorageAccessor {
    /// Select a backend for `env` according to `config.backend`.
    pub fn new(env: &dyn Environment, config: &Config) -> Result<Self> {
        let native = match config.backend {
            BackendPreference::Cookie => None,
            BackendPreference::Auto => env.native_store(),
            BackendPreference::Native => Some(
                env.native_store()
                    .ok_or_else(|| CoreError::Unavailable("Native store".to_string()))?,
            ),
        };

        let backend = match native {
            Some(store) => Backend::Native(NativeBackend::new(store)),
            None => Backend::Cookie(CookieBackend::new(env.cookie_jar()?, config.cookie_encoding)),
        };

        tracing::debug!(
            backend = backend.kind().as_str(),
            preference = ?config.backend,
            "Selected storage backend"
        );

        Ok(Self { backend })
    }

    /// Select a backend with the default configuration.
    pub fn detect(env: &dyn Environment) -> Result<Self> {
        Self::new(env, &Config::default())
    }

    pub fn with_backend(backend: Backend) -> Self {
        Self { backend }
    }

    pub fn kind(&self) -> BackendKind {
        self.backend.kind()
    }
}

impl KeyValueStore for StorageAccessor {
    fn get(&self, key: &str) -> Result<Option<String>> {
        tracing::trace!(key, backend = self.kind().as_str(), "get");
        self.backend.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        tracing::trace!(key, backend = self.kind().as_str(), "set");
        self.backend.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        tracing::trace!(key, backend = self.kind().as_str(), "remove");
        self.backend.remove(key)
    }
}

/// Hand out the store consumers should use.
///
/// A store the host already supplied is returned as-is; otherwise a new
/// `StorageAccessor` is built for `env`.
pub fn install(
    existing: Option<Box<dyn KeyValueStore>>,
    env: &dyn Environment,
    config: &Config,
) -> Result<Box<dyn KeyValueStore>> {
    match existing {
        Some(store) => {
            tracing::debug!("Reusing host-supplied key/value store");
            Ok(store)
        }
        None => Ok(Box::new(StorageAccessor::new(env, config)?)),
    }
}
