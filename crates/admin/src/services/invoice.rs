//! Plain-text invoices for printing at the counter.

use std::fmt::Write;

use crate::models::{Customer, Order};

const WIDTH: usize = 60;
const DEALER_NAME: &str = "AutoPOS Motors";

/// Render `order` as a fixed-width text invoice.
///
/// When the customer record is available its email, phone and address are
/// printed under the bill-to name.
#[must_use]
pub fn render_invoice(order: &Order, customer: Option<&Customer>) -> String {
    let rule = "=".repeat(WIDTH);
    let thin = "-".repeat(WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{DEALER_NAME:^WIDTH$}");
    let _ = writeln!(out, "{:^WIDTH$}", "INVOICE");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Invoice:  {}", order.id);
    let _ = writeln!(out, "Date:     {}", order.date.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(out, "Payment:  {}", order.payment_method);
    let _ = writeln!(out, "Status:   {}", order.status);
    let _ = writeln!(out, "{thin}");

    let _ = writeln!(out, "Bill to:  {} ({})", order.customer_name, order.customer_id);
    if let Some(customer) = customer {
        let _ = writeln!(out, "          {}", customer.email);
        for extra in [&customer.phone, &customer.address] {
            if !extra.is_empty() {
                let _ = writeln!(out, "          {extra}");
            }
        }
    }
    let _ = writeln!(out, "{thin}");

    let _ = writeln!(out, "{:<26} {:<10} {:>4} {:>8} {:>8}", "Vehicle", "Color", "Qty", "Price", "Total");
    for line in &order.items {
        let vehicle = format!("{} {}", line.product.year, line.product.display_name());
        let _ = writeln!(
            out,
            "{:<26} {:<10} {:>4} {:>8} {:>8}",
            truncate(&vehicle, 26),
            truncate(&line.selected_color, 10),
            line.quantity,
            line.product.price.to_string(),
            line.line_total().to_string(),
        );
    }
    let _ = writeln!(out, "{thin}");

    let label_width = WIDTH - 14;
    let _ = writeln!(out, "{:>label_width$} {:>13}", "Subtotal:", order.totals.subtotal.to_string());
    let _ = writeln!(out, "{:>label_width$} {:>13}", "Tax (10%):", order.totals.tax.to_string());
    let _ = writeln!(out, "{:>label_width$} {:>13}", "Total:", order.totals.total.to_string());
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{:^WIDTH$}", "Thank you for your purchase!");
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
        short.push('~');
        short
    }
}
