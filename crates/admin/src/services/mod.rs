//! Point-of-sale services.
//!
//! # Services
//!
//! - `cart` - Cart lines keyed by product and color
//! - `catalog` - Vehicle listing, filtering and stock
//! - `checkout` - Commits the cart as an order
//! - `customers` - Customer directory and purchase history
//! - `export` - CSV exports
//! - `invoice` - Plain-text invoices
//! - `orders` - Committed order history
//! - `reports` - Sales and inventory figures
//! - `seed` - Bundled demo data

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod customers;
pub mod export;
pub mod invoice;
pub mod orders;
pub mod reports;
pub mod seed;

pub use cart::{CartError, CartStore};
pub use catalog::{Catalog, CatalogFilter, SortOrder};
pub use checkout::{Checkout, CheckoutError};
pub use customers::{CustomerDirectory, CustomerError, NewCustomer};
pub use export::{customers_csv, inventory_csv, orders_csv};
pub use invoice::render_invoice;
pub use orders::OrderRecordStore;
pub use reports::{
    InventorySummary, SalesSummary, revenue_by_make, revenue_by_payment_method, sales_by_day,
};
pub use seed::{DemoData, SeedError, demo_data, reset_demo_data, seed_if_empty};
