//! CSV exports of orders, inventory and customers.
//!
//! Every export starts with a header row. Fields containing a comma, quote
//! or line break are quoted with inner quotes doubled (RFC 4180).

use std::borrow::Cow;
use std::fmt::Write;

use autopos_core::Price;
use rust_decimal::Decimal;

use crate::models::{Customer, Order, Product};

/// One row per order.
#[must_use]
pub fn orders_csv(orders: &[Order]) -> String {
    let mut csv = String::from("Invoice,Date,Customer ID,Customer,Items,Units,Subtotal,Tax,Total,Payment,Status\n");
    for order in orders {
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{},{},{},{},{}",
            field(order.id.as_str()),
            order.date.to_rfc3339(),
            field(order.customer_id.as_str()),
            field(&order.customer_name),
            order.items.len(),
            order.unit_count(),
            money(order.totals.subtotal),
            money(order.totals.tax),
            money(order.totals.total),
            order.payment_method,
            order.status,
        );
    }
    csv
}

/// One row per product.
#[must_use]
pub fn inventory_csv(products: &[Product]) -> String {
    let mut csv = String::from("ID,Make,Model,Year,Price,Stock,Colors,VIN,Condition,Mileage,Transmission,Fuel\n");
    for product in products {
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            field(product.id.as_str()),
            field(&product.make),
            field(&product.model),
            product.year,
            money(product.price),
            product.stock,
            field(&product.colors.join("; ")),
            field(&product.vin),
            product.condition,
            product.mileage,
            field(&product.transmission),
            field(&product.fuel_type),
        );
    }
    csv
}

/// One row per customer.
#[must_use]
pub fn customers_csv(customers: &[Customer]) -> String {
    let mut csv = String::from("ID,Name,Email,Phone,Address,Orders\n");
    for customer in customers {
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{}",
            field(customer.id.as_str()),
            field(&customer.name),
            field(customer.email.as_str()),
            field(&customer.phone),
            field(&customer.address),
            customer.order_count(),
        );
    }
    csv
}

fn money(price: Price) -> Decimal {
    price.amount().normalize()
}

fn field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use autopos_core::{CustomerId, OrderId, OrderStatus, PaymentMethod, Totals};
    use chrono::{TimeZone, Utc};

    use crate::models::{CartLine, fixtures};

    #[test]
    fn test_field_quoting() {
        assert_eq!(field("plain"), "plain");
        assert_eq!(field("Doe, Jane"), "\"Doe, Jane\"");
        assert_eq!(field("the \"best\""), "\"the \"\"best\"\"\"");
        assert_eq!(field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_orders_csv() {
        let line = CartLine::new(fixtures::product("P1", "Toyota", 19_900, &["red"], 3), "red", 2);
        let order = Order {
            id: OrderId::new("INV-1"),
            customer_id: CustomerId::new("CU-1"),
            customer_name: "Doe, Jane".to_string(),
            totals: Totals::from_subtotal(line.line_total()),
            items: vec![line],
            payment_method: PaymentMethod::Cash,
            status: OrderStatus::Paid,
            date: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        };

        let csv = orders_csv(&[order]);
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("Invoice,Date,"));
        assert_eq!(
            rows[1],
            "INV-1,2024-01-01T12:00:00+00:00,CU-1,\"Doe, Jane\",1,2,39800,3980,43780,cash,Paid"
        );
    }

    #[test]
    fn test_inventory_csv_joins_colors() {
        let csv = inventory_csv(&[fixtures::product("P1", "Toyota", 19_900, &["red", "black"], 3)]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("P1,Toyota,Test,2022,19900,3,red; black,VIN-P1,new,0,"));
    }

    #[test]
    fn test_customers_csv() {
        let csv = customers_csv(&[fixtures::customer("CU-1", "Jane Doe")]);
        assert_eq!(
            csv,
            "ID,Name,Email,Phone,Address,Orders\nCU-1,Jane Doe,cu-1@example.com,0771234567,,0\n"
        );
    }

    #[test]
    fn test_empty_exports_have_headers_only() {
        assert_eq!(orders_csv(&[]).lines().count(), 1);
        assert_eq!(inventory_csv(&[]).lines().count(), 1);
        assert_eq!(customers_csv(&[]).lines().count(), 1);
    }
}
