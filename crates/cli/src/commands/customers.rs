//! Customer directory.
//!
//! # Usage
//!
//! ```bash
//! autopos customers list --search smith
//! autopos customers add "Ann Lee" ann@example.com --phone 0770000000
//! ```

use tracing::info;

use autopos_admin::services::NewCustomer;
use autopos_admin::{AppError, PosSession};

/// Print customers, optionally narrowed by `search`.
pub fn list(session: &PosSession, search: Option<&str>) {
    let customers = session.customers().search(search.unwrap_or_default());
    if customers.is_empty() {
        println!("No customers.");
        return;
    }

    println!(
        "{:<6} {:<20} {:<26} {:<12} {:>6}",
        "ID", "Name", "Email", "Phone", "Orders"
    );
    for customer in customers {
        println!(
            "{:<6} {:<20} {:<26} {:<12} {:>6}",
            customer.id.as_str(),
            customer.name,
            customer.email.as_str(),
            customer.phone,
            customer.order_count()
        );
    }
}

/// Register a customer.
///
/// # Errors
///
/// Returns a validation error for a blank name, bad or duplicate email, or a
/// storage error if the directory could not be saved.
pub fn add(
    session: &mut PosSession,
    name: String,
    email: String,
    phone: String,
    address: String,
) -> Result<(), AppError> {
    let customer = session.customers_mut().register(NewCustomer {
        name,
        email,
        phone,
        address,
    })?;
    info!(customer_id = %customer.id, "Customer added from CLI");
    println!("Added {} ({})", customer.name, customer.id);
    Ok(())
}
