//! Order history.
//!
//! # Usage
//!
//! ```bash
//! autopos orders list
//! autopos orders list --search jane
//! autopos orders show INV-1704110400000
//! ```

use autopos_admin::services::render_invoice;
use autopos_admin::{AppError, PosSession};
use autopos_core::OrderId;

/// Print orders, most recent first, optionally narrowed by `search`.
pub fn list(session: &PosSession, search: Option<&str>) {
    let orders = session.orders().search(search.unwrap_or_default());
    if orders.is_empty() {
        println!("No orders.");
        return;
    }

    println!(
        "{:<18} {:<17} {:<20} {:>5} {:>10} {:<5} {}",
        "Invoice", "Date", "Customer", "Units", "Total", "Pay", "Status"
    );
    for order in &orders {
        println!(
            "{:<18} {:<17} {:<20} {:>5} {:>10} {:<5} {}",
            order.id.as_str(),
            order.date.format("%Y-%m-%d %H:%M").to_string(),
            order.customer_name,
            order.unit_count(),
            order.totals.total.to_string(),
            order.payment_method.as_str(),
            order.status
        );
    }
}

/// Print the invoice for order `id`.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if no order has that id.
pub fn show(session: &PosSession, id: &str) -> Result<(), AppError> {
    let order = session
        .orders()
        .find(&OrderId::new(id))
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;
    let customer = session.customers().find(&order.customer_id);
    print!("{}", render_invoice(order, customer));
    Ok(())
}
