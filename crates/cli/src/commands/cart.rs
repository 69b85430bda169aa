//! Cart editing.
//!
//! # Usage
//!
//! ```bash
//! autopos cart add C-0001 --color red --quantity 2
//! autopos cart set C-0001 red 1
//! autopos cart remove C-0001 red
//! autopos cart show
//! autopos cart clear
//! ```
//!
//! The cart persists between invocations until checkout or `cart clear`.

use autopos_admin::{AppError, PosSession};
use autopos_core::ProductId;

/// Print the cart lines and totals.
pub fn show(session: &PosSession) {
    let cart = session.cart();
    if cart.is_empty() {
        println!("Cart is empty.");
        return;
    }

    println!(
        "{:<8} {:<28} {:<10} {:>4} {:>10} {:>10}",
        "ID", "Vehicle", "Color", "Qty", "Price", "Total"
    );
    for line in cart.lines() {
        println!(
            "{:<8} {:<28} {:<10} {:>4} {:>10} {:>10}",
            line.product_id().as_str(),
            line.product.display_name(),
            line.selected_color,
            line.quantity,
            line.product.price.to_string(),
            line.line_total().to_string()
        );
    }

    let totals = cart.totals();
    println!("{:>75}", format!("Subtotal: {}", totals.subtotal));
    println!("{:>75}", format!("Tax (10%): {}", totals.tax));
    println!("{:>75}", format!("Total: {}", totals.total));
}

/// Add `quantity` units of `product_id` in `color`.
///
/// # Errors
///
/// Returns a validation error for an unknown product or color, or a storage
/// error if the cart could not be saved.
pub fn add(
    session: &mut PosSession,
    product_id: &str,
    color: Option<&str>,
    quantity: u32,
) -> Result<(), AppError> {
    let product = session
        .catalog()
        .find(&ProductId::new(product_id))
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    session.cart_mut().add_line(&product, quantity, color)?;
    println!(
        "Cart: {} line(s), {} unit(s), total {}",
        session.cart().len(),
        session.cart().unit_count(),
        session.cart().grand_total()
    );
    Ok(())
}

/// Remove the line for `product_id` in `color`.
///
/// # Errors
///
/// Returns an error if the cart could not be saved.
pub fn remove(session: &mut PosSession, product_id: &str, color: &str) -> Result<(), AppError> {
    session.cart_mut().remove_line(&ProductId::new(product_id), color)?;
    println!("Cart: {} line(s)", session.cart().len());
    Ok(())
}

/// Set the quantity of a line; zero or less removes it.
///
/// # Errors
///
/// Returns an error if the cart could not be saved.
pub fn set(
    session: &mut PosSession,
    product_id: &str,
    color: &str,
    quantity: i64,
) -> Result<(), AppError> {
    session
        .cart_mut()
        .set_quantity(&ProductId::new(product_id), color, quantity)?;
    println!(
        "Cart: {} line(s), total {}",
        session.cart().len(),
        session.cart().grand_total()
    );
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart could not be saved.
pub fn clear(session: &mut PosSession) -> Result<(), AppError> {
    session.cart_mut().clear()?;
    println!("Cart cleared.");
    Ok(())
}
