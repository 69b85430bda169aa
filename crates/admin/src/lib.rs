//! AutoPOS back-office library.
//!
//! Holds the point-of-sale stores (cart, catalog, customers, orders), the
//! checkout that ties them together, and the reporting built on top. All
//! state persists as JSON documents in a local key-value store.
//!
//! # Layout
//!
//! - [`db`] - storage backends (`SQLite`, in-memory)
//! - [`models`] - persisted shapes
//! - [`services`] - stores, checkout, reports, exports
//! - [`state`] - [`PosSession`], one set of stores over one backend

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

pub use config::{AdminConfig, ConfigError};
pub use error::AppError;
pub use state::PosSession;
