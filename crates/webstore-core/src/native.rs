//! Native key/value stores
//!
//! `NativeStore` mirrors the `localStorage` item API. A missing key reads as
//! `Ok(None)`; write failures come back as errors and are never retried.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use webstore_storage::{normalize_origin, Database};

use crate::error::CoreError;
use crate::Result;

pub trait NativeStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}

#[derive(Default)]
struct MemoryState {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryState {
    fn usage(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

/// In-process native store.
///
/// Usage is counted as key plus value bytes. An optional quota and a disabled
/// switch let hosts reproduce the write failures a browser store can raise.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(bytes: usize) -> Self {
        let store = Self::new();
        store.state.lock().quota = Some(bytes);
        store
    }

    /// Reject every later write with `CoreError::Disabled`.
    pub fn set_disabled(&self, disabled: bool) {
        self.state.lock().disabled = disabled;
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }
}

impl NativeStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.state.lock().entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.lock();
        if state.disabled {
            return Err(CoreError::Disabled);
        }

        if let Some(limit) = state.quota {
            let replaced = state.entries.get(key).map_or(0, |old| key.len() + old.len());
            let projected = state.usage() - replaced + key.len() + value.len();
            if projected > limit {
                return Err(CoreError::QuotaExceeded {
                    key: key.to_string(),
                    limit,
                });
            }
        }

        state.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut state = self.state.lock();
        if state.disabled {
            return Err(CoreError::Disabled);
        }
        state.entries.remove(key);
        Ok(())
    }
}

/// Native store persisted in SQLite, scoped to one origin.
#[derive(Clone)]
pub struct SqliteStore {
    db: Database,
    origin: String,
}

impl SqliteStore {
    pub fn new(db: Database, origin: &str) -> Result<Self> {
        let origin = normalize_origin(origin)?;
        Ok(Self { db, origin })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl NativeStore for SqliteStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.db.get_entry(&self.origin, key)?)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.db.set_entry(&self.origin, key, value)?)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        Ok(self.db.remove_entry(&self.origin, key)?)
    }
}
