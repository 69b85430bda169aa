//! Subcommand implementations. Each prints its result to stdout.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod customers;
pub mod export;
pub mod orders;
pub mod report;
pub mod seed;
