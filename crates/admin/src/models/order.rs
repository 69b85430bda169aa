//! Committed orders.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use autopos_core::{CustomerId, OrderId, OrderStatus, PaymentMethod, Totals};

use super::CartLine;

/// A settled sale. Created once by checkout and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Invoice number (`INV-<unix millis>`).
    pub id: OrderId,
    pub customer_id: CustomerId,
    /// Customer name at the time of sale.
    pub customer_name: String,
    /// Copy of the cart lines at commit time.
    pub items: Vec<CartLine>,
    /// Stored flat as `subtotal`, `tax`, `total`.
    #[serde(flatten)]
    pub totals: Totals,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    /// When the order was placed.
    pub date: DateTime<Utc>,
}

impl Order {
    /// Total units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// UTC calendar day the order was placed.
    #[must_use]
    pub fn placed_on(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Case-insensitive match on invoice number or customer name.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.id.as_str().to_lowercase().contains(&needle)
            || self.customer_name.to_lowercase().contains(&needle)
    }
}
