//! Enumerations stored on orders and vehicles.
//!
//! The serialized spellings are part of the persisted document format and
//! must not change.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status of a committed order.
///
/// Checkout settles the sale immediately, so every order written by this
/// system is `Paid`. `Pending` exists for records imported from elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Paid,
    Pending,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => f.write_str("Paid"),
            Self::Pending => f.write_str("Pending"),
        }
    }
}

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
    Bank,
}

impl PaymentMethod {
    /// All payment methods, in display order.
    pub const ALL: [Self; 3] = [Self::Card, Self::Cash, Self::Bank];

    /// The persisted spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cash => "cash",
            Self::Bank => "bank",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "cash" => Ok(Self::Cash),
            "bank" => Ok(Self::Bank),
            other => Err(format!("invalid payment method: {other}")),
        }
    }
}

/// Whether a vehicle is sold new or used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCondition {
    #[default]
    New,
    Used,
}

impl fmt::Display for VehicleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => f.write_str("new"),
            Self::Used => f.write_str("used"),
        }
    }
}
