//! Database connection and operations

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;

use crate::migrations::run_migrations;
use crate::Result;

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode so several hosts can read while one writes
        let _: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    /// Read the value stored under `key` for `origin`.
    pub fn get_entry(&self, origin: &str, key: &str) -> Result<Option<String>> {
        self.with_connection(|conn| {
            let value = conn
                .query_row(
                    "SELECT value FROM web_storage WHERE origin = ?1 AND key = ?2",
                    [origin, key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(value)
        })
    }

    /// Insert or overwrite the value under `key` for `origin`.
    pub fn set_entry(&self, origin: &str, key: &str, value: &str) -> Result<()> {
        let updated_at = Utc::now().to_rfc3339();
        self.with_connection(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO web_storage (origin, key, value, updated_at)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![origin, key, value, updated_at],
            )?;
            Ok(())
        })
    }

    /// Delete `key` for `origin`. Missing keys are not an error.
    pub fn remove_entry(&self, origin: &str, key: &str) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute(
                "DELETE FROM web_storage WHERE origin = ?1 AND key = ?2",
                [origin, key],
            )?;
            Ok(())
        })
    }

    pub fn entry_count(&self, origin: &str) -> Result<usize> {
        self.with_connection(|conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM web_storage WHERE origin = ?1",
                [origin],
                |row| row.get(0),
            )?;
            Ok(count as usize)
        })
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}
