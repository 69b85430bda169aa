//! Demo data for a fresh install.
//!
//! The data set lives in `data/demo.json` and is compiled into the binary.

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::db::{self, KeyValueStore, StorageError, keys};
use crate::models::{Customer, Order, Product};

const DEMO_JSON: &str = include_str!("../../data/demo.json");

/// Errors from loading demo data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("bundled demo data is invalid: {0}")]
    InvalidData(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The bundled catalog and customers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoData {
    pub cars: Vec<Product>,
    pub customers: Vec<Customer>,
}

/// Parse the bundled data set.
///
/// # Errors
///
/// Returns an error if the bundled JSON does not match the models.
pub fn demo_data() -> Result<DemoData, SeedError> {
    Ok(serde_json::from_str(DEMO_JSON)?)
}

/// Overwrite the catalog and customers with the demo data, clear the order
/// history and remove the cart.
///
/// Stores hydrated before the reset keep their old state; hydrate again.
///
/// # Errors
///
/// Returns an error if the data is invalid or a write fails.
pub fn reset_demo_data(storage: &dyn KeyValueStore) -> Result<DemoData, SeedError> {
    let data = demo_data()?;
    db::write_json(storage, keys::CARS, &data.cars)?;
    db::write_json(storage, keys::CUSTOMERS, &data.customers)?;
    db::write_json::<[Order]>(storage, keys::ORDERS, &[])?;
    storage.remove(keys::CART)?;

    info!(
        cars = data.cars.len(),
        customers = data.customers.len(),
        "Demo data loaded"
    );
    Ok(data)
}

/// Load the demo data only if no catalog has been stored yet.
///
/// Returns whether the data was loaded.
///
/// # Errors
///
/// Returns an error if storage cannot be read or the reset fails.
pub fn seed_if_empty(storage: &dyn KeyValueStore) -> Result<bool, SeedError> {
    if storage.get(keys::CARS)?.is_some() {
        return Ok(false);
    }
    reset_demo_data(storage)?;
    Ok(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[test]
    fn test_bundled_data_parses() {
        let data = demo_data().unwrap();
        assert_eq!(data.cars.len(), 8);
        assert_eq!(data.customers.len(), 2);
        assert_eq!(data.cars[0].id.as_str(), "C-0001");
        assert_eq!(data.customers[0].id.as_str(), "CU-1");
        assert!(data.customers.iter().all(|c| c.purchase_history.is_empty()));
    }

    #[test]
    fn test_reset_writes_every_key() {
        let storage = MemoryStore::new();
        storage.set(keys::CART, "[]").unwrap();
        storage.set(keys::ORDERS, "[{\"stale\": true}]").unwrap();

        reset_demo_data(&storage).unwrap();

        assert!(storage.get(keys::CART).unwrap().is_none());
        assert_eq!(storage.get(keys::ORDERS).unwrap().as_deref(), Some("[]"));
        let cars: Vec<Product> = db::read_json(&storage, keys::CARS).unwrap();
        assert_eq!(cars.len(), 8);
    }

    #[test]
    fn test_seed_if_empty_leaves_existing_catalog() {
        let storage = MemoryStore::new();
        assert!(seed_if_empty(&storage).unwrap());

        storage.set(keys::CARS, "[]").unwrap();
        assert!(!seed_if_empty(&storage).unwrap());
        assert_eq!(storage.get(keys::CARS).unwrap().as_deref(), Some("[]"));
    }
}
