//! Catalog browsing.
//!
//! # Usage
//!
//! ```bash
//! autopos catalog list
//! autopos catalog list --search civic
//! autopos catalog list -c red -c black --max-price 30000 --sort price-low
//! ```

use autopos_admin::PosSession;
use autopos_admin::models::Product;
use autopos_admin::services::CatalogFilter;

/// Print the vehicles matching `filter`.
pub fn list(session: &PosSession, filter: &CatalogFilter) {
    let catalog = session.catalog();
    if catalog.is_empty() {
        println!("The catalog is empty. Run `autopos seed` to load demo data.");
        return;
    }

    let products = catalog.filter(filter);
    if products.is_empty() {
        println!("No vehicles match.");
        return;
    }

    println!(
        "{:<8} {:<28} {:>10} {:>6}  {:<6} {}",
        "ID", "Vehicle", "Price", "Stock", "Cond.", "Colors"
    );
    for product in &products {
        println!("{}", row(product));
    }
    println!("{} of {} vehicles", products.len(), catalog.len());
}

fn row(product: &Product) -> String {
    format!(
        "{:<8} {:<28} {:>10} {:>6}  {:<6} {}",
        product.id.as_str(),
        format!("{} {}", product.year, product.display_name()),
        product.price.to_string(),
        product.stock,
        product.condition.to_string(),
        product.colors.join(", ")
    )
}
