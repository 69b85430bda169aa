//! Checkout.
//!
//! # Usage
//!
//! ```bash
//! autopos checkout --customer CU-1 --payment cash
//! ```

use autopos_admin::services::render_invoice;
use autopos_admin::{AppError, PosSession};
use autopos_core::{CustomerId, PaymentMethod};

/// Commit the cart for `customer_id` and print the invoice.
///
/// # Errors
///
/// Returns a validation error if the customer is unknown or the cart is
/// empty, or a storage error if a write fails part way through.
pub fn run(
    session: &mut PosSession,
    customer_id: &str,
    payment_method: PaymentMethod,
) -> Result<(), AppError> {
    let order = session.checkout(&CustomerId::new(customer_id), payment_method)?;
    let customer = session.customers().find(&order.customer_id);
    print!("{}", render_invoice(&order, customer));
    Ok(())
}
