//! The cart: line items awaiting checkout.
//!
//! Lines are keyed by (product id, color). Every change is written through
//! to the `cart` document; the store hydrates from that document when it is
//! created and starts empty if the document is missing or unreadable.
//!
//! Stock is not checked here. A cart may ask for more units than are on hand;
//! checkout floors the stock decrement at zero.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use autopos_core::{Price, ProductId, Totals};

use crate::db::{self, KeyValueStore, StorageError, keys};
use crate::models::{CartLine, Product, default_color};

/// Errors from adding to the cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// No color was given and the product lists none to default to.
    #[error("product {0} has no color variants")]
    NoColorVariant(ProductId),

    /// The cart changed in memory but could not be saved.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Line items pending purchase, persisted under the `cart` key.
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
    lines: Vec<CartLine>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Load the cart from storage.
    ///
    /// Missing or malformed data yields an empty cart. Stored lines with a
    /// zero quantity are dropped.
    #[must_use]
    pub fn hydrate(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut lines: Vec<CartLine> = db::read_json(storage.as_ref(), keys::CART).unwrap_or_default();
        let stored = lines.len();
        lines.retain(|line| line.quantity > 0);
        if lines.len() != stored {
            warn!(dropped = stored - lines.len(), "Dropped empty cart lines from storage");
        }
        Self { storage, lines }
    }

    /// Current lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for (`product_id`, `color`), if present.
    #[must_use]
    pub fn line(&self, product_id: &ProductId, color: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.is_keyed(product_id, color))
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Add `quantity` units of `product` in `color`.
    ///
    /// Without a color the product's first listed color is used. A color the
    /// product does not list is accepted and logged. If a line for the same
    /// product and color exists its quantity grows; otherwise a new line is
    /// appended. Adding zero units changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NoColorVariant`] without touching the cart, or
    /// [`CartError::Storage`] if the updated cart could not be saved (the
    /// in-memory change is kept).
    pub fn add_line(
        &mut self,
        product: &Product,
        quantity: u32,
        color: Option<&str>,
    ) -> Result<(), CartError> {
        let color = match color {
            Some(color) => {
                if !product.offers_color(color) {
                    warn!(product_id = %product.id, color, "Color is not a listed variant");
                }
                color
            }
            None => default_color(product)
                .ok_or_else(|| CartError::NoColorVariant(product.id.clone()))?,
        };

        if quantity == 0 {
            debug!(product_id = %product.id, color, "Ignoring add of zero units");
            return Ok(());
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.is_keyed(&product.id, color))
        {
            line.quantity = line.quantity.saturating_add(quantity);
            debug!(product_id = %product.id, color, quantity = line.quantity, "Increased cart line");
        } else {
            self.lines.push(CartLine::new(product.clone(), color, quantity));
            debug!(product_id = %product.id, color, quantity, "Added cart line");
        }

        self.persist()?;
        Ok(())
    }

    /// Remove the line for (`product_id`, `color`). Absent lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart could not be saved.
    pub fn remove_line(&mut self, product_id: &ProductId, color: &str) -> Result<(), StorageError> {
        let before = self.lines.len();
        self.lines.retain(|line| !line.is_keyed(product_id, color));
        if self.lines.len() == before {
            return Ok(());
        }

        debug!(product_id = %product_id, color, "Removed cart line");
        self.persist()
    }

    /// Replace the quantity of a line; zero or below removes it.
    ///
    /// Setting the quantity of a line that is not in the cart does nothing.
    /// Quantities above `u32::MAX` are capped there.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart could not be saved.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        color: &str,
        quantity: i64,
    ) -> Result<(), StorageError> {
        if quantity <= 0 {
            return self.remove_line(product_id, color);
        }

        let quantity = u32::try_from(quantity).unwrap_or_else(|_| {
            warn!(
                product_id = %product_id,
                color,
                requested = quantity,
                "Capping cart line quantity"
            );
            u32::MAX
        });
        let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.is_keyed(product_id, color))
        else {
            return Ok(());
        };
        if line.quantity == quantity {
            return Ok(());
        }

        line.quantity = quantity;
        debug!(product_id = %product_id, color, quantity, "Set cart line quantity");
        self.persist()
    }

    /// Remove every line.
    ///
    /// # Errors
    ///
    /// Returns an error if the empty cart could not be saved.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.lines.clear();
        self.persist()
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Tax on the subtotal at the fixed 10% rate.
    #[must_use]
    pub fn tax(&self) -> Price {
        self.subtotal().tax()
    }

    /// Subtotal plus tax.
    #[must_use]
    pub fn grand_total(&self) -> Price {
        self.totals().total
    }

    /// Subtotal, tax and grand total together.
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::from_subtotal(self.subtotal())
    }

    fn persist(&self) -> Result<(), StorageError> {
        db::write_json(self.storage.as_ref(), keys::CART, &self.lines)
    }
}
