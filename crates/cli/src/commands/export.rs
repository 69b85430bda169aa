//! CSV exports.
//!
//! # Usage
//!
//! ```bash
//! autopos export orders > orders.csv
//! autopos export inventory --output inventory.csv
//! autopos export customers
//! ```

use std::path::Path;

use tracing::info;

use autopos_admin::services::{customers_csv, inventory_csv, orders_csv};
use autopos_admin::{AppError, PosSession};

#[must_use]
pub fn orders(session: &PosSession) -> String {
    orders_csv(session.orders().list())
}

#[must_use]
pub fn inventory(session: &PosSession) -> String {
    inventory_csv(session.catalog().products())
}

#[must_use]
pub fn customers(session: &PosSession) -> String {
    customers_csv(session.customers().list())
}

/// Write `csv` to `output`, or to stdout when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write(csv: &str, output: Option<&Path>) -> Result<(), AppError> {
    match output {
        Some(path) => {
            std::fs::write(path, csv)?;
            info!(path = %path.display(), bytes = csv.len(), "Export written");
        }
        None => print!("{csv}"),
    }
    Ok(())
}
