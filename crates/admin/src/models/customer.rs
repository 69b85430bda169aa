//! Customers known to the dealership.

use serde::{Deserialize, Serialize};

use autopos_core::{CustomerId, Email, OrderId};

/// A customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Directory identifier (e.g. `CU-1`).
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    #[serde(default)]
    pub phone: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Orders placed by this customer, oldest first. Append-only.
    #[serde(default)]
    pub purchase_history: Vec<OrderId>,
}

impl Customer {
    /// Number of orders placed.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.purchase_history.len()
    }

    /// Case-insensitive match on name or email, substring match on phone.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.email.as_str().to_lowercase().contains(&needle)
            || self.phone.contains(query.trim())
    }
}
