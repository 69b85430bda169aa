//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices are whole currency units, but tax is a percentage of the
//! subtotal and can produce fractions. Amounts are therefore kept as
//! [`Decimal`] so that `total == subtotal + tax` holds exactly.
//!
//! Prices serialize as plain JSON numbers (`19900`, `1995.5`) to stay
//! compatible with the persisted documents. Whole amounts are written as
//! integers.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};

/// Fixed sales tax rate applied at checkout (10%).
pub const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// An amount of money in the store currency's standard unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(
    #[serde(
        serialize_with = "serialize_amount",
        deserialize_with = "rust_decimal::serde::float::deserialize"
    )]
    Decimal,
);

fn serialize_amount<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    match amount.fract().is_zero().then(|| amount.to_i64()).flatten() {
        Some(units) => serializer.serialize_i64(units),
        None => rust_decimal::serde::float::serialize(amount, serializer),
    }
}

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// This price multiplied by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Sales tax owed on this amount at [`TAX_RATE`].
    #[must_use]
    pub fn tax(self) -> Self {
        Self(self.0 * TAX_RATE)
    }

    /// Returns `true` when the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        self.times(rhs)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// Formats as `$39,800` or `$1,995.5` (thousands separators, no trailing zeros).
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized = self.0.normalize();
        let text = normalized.abs().to_string();
        let (whole, fraction) = text
            .split_once('.')
            .map_or((text.as_str(), None), |(w, fr)| (w, Some(fr)));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        if normalized.is_sign_negative() && !normalized.is_zero() {
            f.write_str("-")?;
        }
        write!(f, "${grouped}")?;
        if let Some(fraction) = fraction {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}

/// Subtotal, tax and grand total of a set of line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of `price * quantity` over all lines.
    pub subtotal: Price,
    /// `subtotal * TAX_RATE`.
    pub tax: Price,
    /// `subtotal + tax`.
    pub total: Price,
}

impl Totals {
    /// Derive tax and grand total from a subtotal.
    #[must_use]
    pub fn from_subtotal(subtotal: Price) -> Self {
        let tax = subtotal.tax();
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
