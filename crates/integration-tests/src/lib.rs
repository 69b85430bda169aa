//! Integration tests for AutoPOS.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p autopos-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - cart to order against a file-backed database
//! - `persistence` - stores surviving a reopen of the database
//! - `reports_export` - reports and CSV over committed orders
//!
//! Each test gets its own `SQLite` file in a [`tempfile::TempDir`], removed
//! when the [`TestDb`] is dropped, including when the test panics.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use autopos_admin::db::{KeyValueStore, SqliteStore, StorageError};
use autopos_admin::{AppError, PosSession};

/// A uniquely named `SQLite` database for one test.
#[derive(Debug)]
pub struct TestDb {
    dir: TempDir,
}

impl TestDb {
    /// Reserve a fresh database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("autopos-it-").tempdir()?;
        Ok(Self { dir })
    }

    /// Path of the database file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("autopos.db")
    }
    /// Open a new connection to the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn store(&self) -> Result<Arc<dyn KeyValueStore>, StorageError> {
        Ok(Arc::new(SqliteStore::open(self.path())?))
    }

    /// Open a session over a new connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn session(&self) -> Result<PosSession, StorageError> {
        Ok(PosSession::open(self.store()?))
    }

    /// Open a session and load the demo data into it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or seeded.
    pub fn seeded_session(&self) -> Result<PosSession, AppError> {
        let mut session = self.session()?;
        session.reset_demo_data()?;
        Ok(session)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
