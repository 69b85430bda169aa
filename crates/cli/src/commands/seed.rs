//! Reset to the bundled demo data.
//!
//! # Usage
//!
//! ```bash
//! autopos seed
//! ```
//!
//! Overwrites the catalog and customers, clears the order history and
//! removes the cart.

use tracing::info;

use autopos_admin::{AppError, PosSession};

/// Load the demo data into the session's storage.
///
/// # Errors
///
/// Returns an error if the data cannot be written.
pub fn run(session: &mut PosSession) -> Result<(), AppError> {
    let data = session.reset_demo_data()?;
    info!("Demo data reset");
    println!(
        "Loaded {} vehicles and {} customers; order history cleared.",
        data.cars.len(),
        data.customers.len()
    );
    Ok(())
}
