//! Session state: the stores of one point-of-sale session.
//!
//! A session owns one instance of each store, all sharing a single storage
//! backend. It is built once at startup and passed by reference to whatever
//! drives it.

use std::fmt;
use std::sync::Arc;

use autopos_core::{CustomerId, PaymentMethod};

use crate::config::AdminConfig;
use crate::db::{KeyValueStore, SqliteStore};
use crate::error::AppError;
use crate::models::Order;
use crate::services::{
    CartStore, Catalog, Checkout, CheckoutError, CustomerDirectory, DemoData, OrderRecordStore,
    SeedError, reset_demo_data, seed_if_empty,
};

/// The stores of one session.
pub struct PosSession {
    storage: Arc<dyn KeyValueStore>,
    cart: CartStore,
    catalog: Catalog,
    customers: CustomerDirectory,
    orders: OrderRecordStore,
}

impl fmt::Debug for PosSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PosSession")
            .field("cart", &self.cart)
            .field("catalog", &self.catalog)
            .field("customers", &self.customers)
            .field("orders", &self.orders)
            .finish_non_exhaustive()
    }
}

impl PosSession {
    /// Hydrate every store from `storage`.
    #[must_use]
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            cart: CartStore::hydrate(Arc::clone(&storage)),
            catalog: Catalog::hydrate(Arc::clone(&storage)),
            customers: CustomerDirectory::hydrate(Arc::clone(&storage)),
            orders: OrderRecordStore::hydrate(Arc::clone(&storage)),
            storage,
        }
    }

    /// Open the configured `SQLite` database, seeding demo data first if the
    /// configuration asks for it and no catalog exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or seeding fails.
    pub fn from_config(config: &AdminConfig) -> Result<Self, AppError> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open(&config.database_path)?);
        if config.seed_if_empty {
            seed_if_empty(storage.as_ref())?;
        }
        Ok(Self::open(storage))
    }

    /// The shared storage backend.
    #[must_use]
    pub fn storage(&self) -> &Arc<dyn KeyValueStore> {
        &self.storage
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }

    pub const fn customers_mut(&mut self) -> &mut CustomerDirectory {
        &mut self.customers
    }

    #[must_use]
    pub const fn orders(&self) -> &OrderRecordStore {
        &self.orders
    }

    /// Commit the cart as an order for `customer_id`.
    ///
    /// # Errors
    ///
    /// See [`Checkout::commit_at`].
    pub fn checkout(
        &mut self,
        customer_id: &CustomerId,
        payment_method: PaymentMethod,
    ) -> Result<Order, CheckoutError> {
        self.checkout_parts().commit(customer_id, payment_method)
    }

    /// Borrow the stores a checkout needs, e.g. to commit at a fixed time.
    pub const fn checkout_parts(&mut self) -> Checkout<'_> {
        Checkout {
            cart: &mut self.cart,
            catalog: &mut self.catalog,
            customers: &mut self.customers,
            orders: &mut self.orders,
        }
    }

    /// Replace all data with the bundled demo set and re-hydrate.
    ///
    /// # Errors
    ///
    /// Returns an error if the reset fails; stores are re-hydrated either way.
    pub fn reset_demo_data(&mut self) -> Result<DemoData, SeedError> {
        let result = reset_demo_data(self.storage.as_ref());
        *self = Self::open(Arc::clone(&self.storage));
        result
    }
}
