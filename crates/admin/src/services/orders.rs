//! Committed order history.

use std::fmt;
use std::sync::Arc;

use autopos_core::OrderId;

use crate::db::{self, KeyValueStore, StorageError, keys};
use crate::models::Order;

/// Append-only record of committed orders, most recent first.
///
/// Orders are never edited or deleted once recorded.
pub struct OrderRecordStore {
    storage: Arc<dyn KeyValueStore>,
    orders: Vec<Order>,
}

impl fmt::Debug for OrderRecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderRecordStore")
            .field("orders", &self.orders.len())
            .finish_non_exhaustive()
    }
}

impl OrderRecordStore {
    /// Load the history. Missing or malformed data yields no orders.
    #[must_use]
    pub fn hydrate(storage: Arc<dyn KeyValueStore>) -> Self {
        let orders = db::read_json(storage.as_ref(), keys::ORDERS).unwrap_or_default();
        Self { storage, orders }
    }

    /// Record `order` as the most recent and save.
    ///
    /// # Errors
    ///
    /// Returns an error if the history could not be saved. The order stays
    /// recorded in memory.
    pub fn append(&mut self, order: Order) -> Result<(), StorageError> {
        self.orders.insert(0, order);
        self.persist()
    }

    /// Every order, most recent first.
    #[must_use]
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn find(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == *id)
    }

    /// Orders whose invoice number or customer name match `query`.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.matches(query)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Drop every order and save. Used when resetting demo data.
    ///
    /// # Errors
    ///
    /// Returns an error if the empty history could not be saved.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.orders.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        db::write_json(self.storage.as_ref(), keys::ORDERS, &self.orders)
    }
}
