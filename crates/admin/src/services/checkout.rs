//! Checkout: turns the cart into a committed order.
//!
//! A commit touches four documents in order: the order history, the catalog
//! (stock), the customer's purchase history and the cart. Validation happens
//! before the first write, so a rejected checkout changes nothing. Once
//! writing starts there is no rollback; a failed write is returned and the
//! documents already written stay written.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{error, info, instrument};

use autopos_core::{CustomerId, OrderId, OrderStatus, PaymentMethod};

use crate::db::StorageError;
use crate::models::Order;

use super::{CartStore, Catalog, CustomerDirectory, OrderRecordStore};

/// Reasons a checkout was not completed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// No customer id was given.
    #[error("no customer selected")]
    NoCustomerSelected,

    /// The customer id is not in the directory.
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),

    /// There is nothing to sell.
    #[error("cart is empty")]
    EmptyCart,

    /// A write failed part way through the commit.
    #[error("checkout could not be saved: {0}")]
    Storage(#[from] StorageError),
}

impl CheckoutError {
    /// Whether the checkout was rejected before any state changed.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

/// The stores a checkout reads and writes, borrowed for one commit.
#[derive(Debug)]
pub struct Checkout<'a> {
    pub cart: &'a mut CartStore,
    pub catalog: &'a mut Catalog,
    pub customers: &'a mut CustomerDirectory,
    pub orders: &'a mut OrderRecordStore,
}

impl Checkout<'_> {
    /// Commit the cart for `customer_id`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// See [`Checkout::commit_at`].
    pub fn commit(
        self,
        customer_id: &CustomerId,
        payment_method: PaymentMethod,
    ) -> Result<Order, CheckoutError> {
        self.commit_at(customer_id, payment_method, Utc::now())
    }

    /// Commit the cart for `customer_id` as placed at `placed_at`.
    ///
    /// Stock is taken per cart line and floors at zero, so selling more units
    /// than are on hand succeeds and leaves the product at zero.
    ///
    /// # Errors
    ///
    /// Returns a validation error (nothing changed) if the customer is blank
    /// or unknown or the cart is empty. Returns [`CheckoutError::Storage`] if
    /// a write fails part way through.
    #[instrument(skip_all, fields(customer_id = %customer_id, payment = %payment_method))]
    pub fn commit_at(
        self,
        customer_id: &CustomerId,
        payment_method: PaymentMethod,
        placed_at: DateTime<Utc>,
    ) -> Result<Order, CheckoutError> {
        if customer_id.as_str().trim().is_empty() {
            return Err(CheckoutError::NoCustomerSelected);
        }
        let customer = self
            .customers
            .find(customer_id)
            .ok_or_else(|| CheckoutError::CustomerNotFound(customer_id.clone()))?;
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = Order {
            id: OrderId::from_timestamp_millis(placed_at.timestamp_millis()),
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            items: self.cart.lines().to_vec(),
            totals: self.cart.totals(),
            payment_method,
            status: OrderStatus::Paid,
            date: placed_at,
        };

        self.write(&order).inspect_err(|e| {
            error!(order_id = %order.id, error = %e, "Checkout write failed; earlier writes are kept");
        })?;

        info!(
            order_id = %order.id,
            lines = order.items.len(),
            total = %order.totals.total,
            "Order committed"
        );
        Ok(order)
    }

    fn write(self, order: &Order) -> Result<(), StorageError> {
        self.orders.append(order.clone())?;

        for line in &order.items {
            self.catalog.decrement_stock(line.product_id(), line.quantity);
        }
        self.catalog.persist()?;

        self.customers.record_purchase(&order.customer_id, order.id.clone())?;
        self.cart.clear()
    }
}
