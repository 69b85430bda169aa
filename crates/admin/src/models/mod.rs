//! Domain models for the point of sale.
//!
//! These are the shapes persisted in local storage. Field names serialize in
//! camelCase to match the stored documents.

pub mod cart;
pub mod customer;
pub mod order;
pub mod product;

pub use cart::CartLine;
pub use customer::Customer;
pub use order::Order;
pub use product::{Product, default_color};
