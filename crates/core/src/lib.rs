//! AutoPOS Core - Shared domain types.
//!
//! This crate provides the types used across all AutoPOS components:
//! - `admin` - Storage backends, stores and back-office services
//! - `cli` - Command-line front end for the point of sale
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
