//! Back-office configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `AUTOPOS_DATABASE_PATH` - `SQLite` file holding local storage (default: autopos.db)
//! - `AUTOPOS_LOW_STOCK_THRESHOLD` - Stock at or below this is reported as low (default: 2)
//! - `AUTOPOS_SEED_IF_EMPTY` - Load demo data when no catalog is stored (default: false)
//! - `AUTOPOS_LOG_JSON` - Emit logs as JSON lines (default: false)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATABASE_PATH: &str = "autopos.db";
const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 2;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Back-office configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// `SQLite` database file
    pub database_path: PathBuf,
    /// Low-stock cutoff for inventory reports
    pub low_stock_threshold: u32,
    /// Seed demo data on first run
    pub seed_if_empty: bool,
    /// JSON log output
    pub log_json: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            seed_if_empty: false,
            log_json: false,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_path = lookup("AUTOPOS_DATABASE_PATH")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH), PathBuf::from);

        let low_stock_threshold = match lookup("AUTOPOS_LOW_STOCK_THRESHOLD") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                ConfigError::InvalidEnvVar("AUTOPOS_LOW_STOCK_THRESHOLD".to_string(), e.to_string())
            })?,
            None => DEFAULT_LOW_STOCK_THRESHOLD,
        };

        let seed_if_empty = parse_flag("AUTOPOS_SEED_IF_EMPTY", lookup("AUTOPOS_SEED_IF_EMPTY"))?;
        let log_json = parse_flag("AUTOPOS_LOG_JSON", lookup("AUTOPOS_LOG_JSON"))?;

        Ok(Self {
            database_path,
            low_stock_threshold,
            seed_if_empty,
            log_json,
        })
    }

    /// Replace the database path, e.g. from a command-line flag.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }
}

/// Parse a boolean flag; unset means false.
fn parse_flag(key: &str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}
