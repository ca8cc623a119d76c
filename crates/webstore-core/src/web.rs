//! Browser bindings: `window.localStorage` and `document.cookie`

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, Storage};

use webstore_cookie::{CookieError, CookieJar};

use crate::environment::Environment;
use crate::error::CoreError;
use crate::native::NativeStore;
use crate::Result;

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// The page's global environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEnvironment;

impl Environment for BrowserEnvironment {
    fn native_store(&self) -> Option<Rc<dyn NativeStore>> {
        let window = web_sys::window()?;

        // Private browsing modes may throw instead of returning null
        match window.local_storage() {
            Ok(Some(storage)) => Some(Rc::new(BrowserLocalStorage::new(storage))),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %describe(err), "localStorage probe failed");
                None
            }
        }
    }

    fn cookie_jar(&self) -> Result<Rc<dyn CookieJar>> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CoreError::Unavailable("document".to_string()))?;
        let document = document
            .dyn_into::<HtmlDocument>()
            .map_err(|_| CoreError::Unavailable("HTML document".to_string()))?;

        Ok(Rc::new(BrowserCookieJar::new(document)))
    }
}

pub struct BrowserLocalStorage {
    storage: Storage,
}

impl BrowserLocalStorage {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

impl NativeStore for BrowserLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| CoreError::Environment(describe(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| CoreError::Environment(describe(e)))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| CoreError::Environment(describe(e)))
    }
}

pub struct BrowserCookieJar {
    document: HtmlDocument,
}

impl BrowserCookieJar {
    pub fn new(document: HtmlDocument) -> Self {
        Self { document }
    }
}

impl CookieJar for BrowserCookieJar {
    fn cookie(&self) -> webstore_cookie::Result<String> {
        self.document
            .cookie()
            .map_err(|e| CookieError::Environment(describe(e)))
    }

    fn set_cookie(&self, field: &str) -> webstore_cookie::Result<()> {
        self.document
            .set_cookie(field)
            .map_err(|e| CookieError::Environment(describe(e)))
    }
}
