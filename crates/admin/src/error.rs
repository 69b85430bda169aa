//! Unified error handling for the back office.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::StorageError;
use crate::services::{CartError, CheckoutError, CustomerError, SeedError};

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Local storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading or writing a user-supplied file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input rejected before any state changed.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the error came from rejected input rather than a failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_))
    }

    /// Message safe to show an operator. Storage and internal failures are
    /// reduced to a generic line; the detail goes to the log.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Storage(_) => "Could not save changes. Please try again.".to_string(),
            Self::Internal(_) => "Internal error".to_string(),
            Self::Config(e) => e.to_string(),
            Self::Io(e) => e.to_string(),
            Self::Validation(msg) | Self::NotFound(msg) => msg.clone(),
        }
    }
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::Storage(e) => Self::Storage(e),
            other => Self::Validation(other.to_string()),
        }
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::Storage(e) => Self::Storage(e),
            other @ CheckoutError::CustomerNotFound(_) => Self::NotFound(other.to_string()),
            other => Self::Validation(other.to_string()),
        }
    }
}

impl From<CustomerError> for AppError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::Storage(e) => Self::Storage(e),
            other => Self::Validation(other.to_string()),
        }
    }
}

impl From<SeedError> for AppError {
    fn from(err: SeedError) -> Self {
        match err {
            SeedError::Storage(e) => Self::Storage(e),
            SeedError::InvalidData(e) => Self::Internal(e.to_string()),
        }
    }
}
