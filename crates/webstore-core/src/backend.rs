//! Storage backends
//!
//! Both backends expose the same capability set. A miss is `Ok(None)` on
//! either backend; `BackendKind` tells callers which one answered.

use serde::{Deserialize, Serialize};
use std::rc::Rc;

use webstore_cookie::{expire_field, extract, format_field, CookieEncoding, CookieJar};

use crate::native::NativeStore;
use crate::Result;

/// String key/value capability set handed to consumers.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Native,
    Cookie,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Native => "native",
            BackendKind::Cookie => "cookie",
        }
    }
}

/// Adapter over the environment's native store.
pub struct NativeBackend {
    store: Rc<dyn NativeStore>,
}

impl NativeBackend {
    pub fn new(store: Rc<dyn NativeStore>) -> Self {
        Self { store }
    }
}

impl KeyValueStore for NativeBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.store.get_item(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.store.set_item(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.store.remove_item(key)
    }
}

/// Adapter over the document's cookie header.
///
/// Writes are attribute-less, so every field lives for the browsing session.
pub struct CookieBackend {
    jar: Rc<dyn CookieJar>,
    encoding: CookieEncoding,
}

impl CookieBackend {
    pub fn new(jar: Rc<dyn CookieJar>, encoding: CookieEncoding) -> Self {
        Self { jar, encoding }
    }
}

impl KeyValueStore for CookieBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let header = self.jar.cookie()?;
        let key = self.encoding.encode(key);

        match extract(&header, &key) {
            Some(raw) => Ok(Some(self.encoding.decode(&raw)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let field = format_field(&self.encoding.encode(key), &self.encoding.encode(value));
        self.jar.set_cookie(&field)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.jar.set_cookie(&expire_field(&self.encoding.encode(key)))?;
        Ok(())
    }
}

/// The backend an accessor settled on.
pub enum Backend {
    Native(NativeBackend),
    Cookie(CookieBackend),
}

impl Backend {
    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::Native(_) => BackendKind::Native,
            Backend::Cookie(_) => BackendKind::Cookie,
        }
    }

    fn store(&self) -> &dyn KeyValueStore {
        match self {
            Backend::Native(backend) => backend,
            Backend::Cookie(backend) => backend,
        }
    }
}

impl KeyValueStore for Backend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.store().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.store().set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.store().remove(key)
    }
}
