//! `SQLite` storage backend.
//!
//! Documents live in a single `local_storage` table keyed by storage key.
//! The connection runs in WAL mode with a busy timeout so a second process
//! reading the same file does not fail outright; concurrent writers remain
//! last-write-wins.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use super::{KeyValueStore, StorageError};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS local_storage (
        storage_key TEXT PRIMARY KEY NOT NULL,
        storage_value TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );";

/// A [`KeyValueStore`] persisted in an `SQLite` database.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open (or create) the database file at `path`.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the database
    /// cannot be opened and initialized.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        info!(path = %path.display(), "Opening local storage database");
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;
             PRAGMA synchronous = NORMAL;",
        )?;
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` cannot allocate the database.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Location of the database file, `None` for in-memory databases.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All stored keys in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        let mut stmt = conn.prepare("SELECT storage_key FROM local_storage ORDER BY storage_key")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        let value = conn
            .query_row(
                "SELECT storage_value FROM local_storage WHERE storage_key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        conn.execute(
            "INSERT INTO local_storage (storage_key, storage_value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(storage_key) DO UPDATE SET
                storage_value = excluded.storage_value,
                updated_at = excluded.updated_at",
            params![key, value],
        )?;
        debug!(key, bytes = value.len(), "Stored document");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        conn.execute(
            "DELETE FROM local_storage WHERE storage_key = ?1",
            params![key],
        )?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_has_no_path() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.path().is_none());
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_upsert_replaces_value() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("orders", "[]").unwrap();
        store.set("orders", "[1]").unwrap();
        assert_eq!(store.get("orders").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.keys().unwrap(), vec!["orders".to_string()]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("cart", "[]").unwrap();
        store.remove("cart").unwrap();
        store.remove("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("customers").unwrap(), None);
    }
}
