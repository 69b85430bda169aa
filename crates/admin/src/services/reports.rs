//! Sales and inventory figures for the back-office dashboard.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use autopos_core::{PaymentMethod, Price};

use crate::models::{Order, Product};

/// Headline sales figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub order_count: usize,
    pub units_sold: u64,
    /// Sum of order totals, tax included.
    pub revenue: Price,
    pub tax_collected: Price,
    /// Revenue divided by order count; zero without orders.
    pub average_order_value: Price,
}

impl SalesSummary {
    #[must_use]
    pub fn from_orders(orders: &[Order]) -> Self {
        let revenue: Price = orders.iter().map(|o| o.totals.total).sum();
        let average_order_value = if orders.is_empty() {
            Price::ZERO
        } else {
            Price::new((revenue.amount() / Decimal::from(orders.len())).round_dp(2))
        };

        Self {
            order_count: orders.len(),
            units_sold: orders.iter().map(Order::unit_count).sum(),
            revenue,
            tax_collected: orders.iter().map(|o| o.totals.tax).sum(),
            average_order_value,
        }
    }
}

/// Pre-tax line revenue per make, largest first. Ties are alphabetical.
#[must_use]
pub fn revenue_by_make(orders: &[Order]) -> Vec<(String, Price)> {
    let mut totals: BTreeMap<&str, Price> = BTreeMap::new();
    for line in orders.iter().flat_map(|o| &o.items) {
        *totals.entry(line.product.make.as_str()).or_default() += line.line_total();
    }

    let mut ranked: Vec<(String, Price)> = totals
        .into_iter()
        .map(|(make, revenue)| (make.to_string(), revenue))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Order totals per UTC calendar day, oldest day first.
#[must_use]
pub fn sales_by_day(orders: &[Order]) -> Vec<(NaiveDate, Price)> {
    let mut days: BTreeMap<NaiveDate, Price> = BTreeMap::new();
    for order in orders {
        *days.entry(order.placed_on()).or_default() += order.totals.total;
    }
    days.into_iter().collect()
}

/// Order totals per payment method, in [`PaymentMethod::ALL`] order.
/// Methods without orders are listed with zero.
#[must_use]
pub fn revenue_by_payment_method(orders: &[Order]) -> Vec<(PaymentMethod, Price)> {
    let mut totals: HashMap<PaymentMethod, Price> = HashMap::new();
    for order in orders {
        *totals.entry(order.payment_method).or_default() += order.totals.total;
    }
    PaymentMethod::ALL
        .into_iter()
        .map(|method| (method, totals.get(&method).copied().unwrap_or_default()))
        .collect()
}

/// Stock on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub product_count: usize,
    pub units_in_stock: u64,
    /// Sum of `price * stock`.
    pub stock_value: Price,
    /// Ids of products at or below the low-stock threshold.
    pub low_stock: Vec<String>,
}

impl InventorySummary {
    #[must_use]
    pub fn from_products(products: &[Product], low_stock_threshold: u32) -> Self {
        Self {
            product_count: products.len(),
            units_in_stock: products.iter().map(|p| u64::from(p.stock)).sum(),
            stock_value: products.iter().map(|p| p.price.times(p.stock)).sum(),
            low_stock: products
                .iter()
                .filter(|p| p.is_low_stock(low_stock_threshold))
                .map(|p| p.id.to_string())
                .collect(),
        }
    }
}
