//! Local key-value persistence.
//!
//! Every store in this crate keeps its state as one JSON document under a
//! fixed key. The backend is injected through [`KeyValueStore`], so the same
//! stores run against SQLite on disk or a plain in-memory map in tests.
//!
//! # Keys
//!
//! - `cart` - current cart lines
//! - `cars` - product catalog including stock
//! - `customers` - customer directory including purchase history
//! - `orders` - committed orders, most recent first
//!
//! Writes are last-write-wins; there is no coordination between processes
//! sharing one database file.

pub mod memory;
pub mod sqlite;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Storage keys for the persisted documents.
pub mod keys {
    /// Current cart lines.
    pub const CART: &str = "cart";
    /// Product catalog.
    pub const CARS: &str = "cars";
    /// Customer directory.
    pub const CUSTOMERS: &str = "customers";
    /// Committed orders, most recent first.
    pub const ORDERS: &str = "orders";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// `SQLite` operation failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Value could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while preparing the database location.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A previous panic poisoned the backend lock.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A string-keyed store of string values.
///
/// Implementations use interior mutability so that several stores can share
/// one backend by reference.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Absent keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the delete.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode the JSON document under `key`.
///
/// Returns `None` when the key is absent, the backend cannot be read, or the
/// stored text does not decode as `T`. Read failures are logged and never
/// propagated: callers substitute an empty default.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "Failed to read from local storage");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Ignoring malformed document in local storage");
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if encoding or the backend write fails. The failure is
/// also logged.
pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let result = serde_json::to_string(value)
        .map_err(StorageError::from)
        .and_then(|raw| store.set(key, &raw));

    if let Err(e) = &result {
        warn!(key, error = %e, "Failed to write to local storage");
    }
    result
}
