//! Sales and inventory report.
//!
//! # Usage
//!
//! ```bash
//! autopos report
//! ```

use autopos_admin::PosSession;
use autopos_admin::services::{
    InventorySummary, SalesSummary, revenue_by_make, revenue_by_payment_method, sales_by_day,
};

/// Print the dashboard figures.
pub fn run(session: &PosSession, low_stock_threshold: u32) {
    let orders = session.orders().list();
    let sales = SalesSummary::from_orders(orders);

    println!("Sales");
    println!("  Orders:              {}", sales.order_count);
    println!("  Units sold:          {}", sales.units_sold);
    println!("  Revenue:             {}", sales.revenue);
    println!("  Tax collected:       {}", sales.tax_collected);
    println!("  Average order value: {}", sales.average_order_value);

    println!();
    println!("Revenue by make (before tax)");
    for (make, revenue) in revenue_by_make(orders) {
        println!("  {make:<20} {:>12}", revenue.to_string());
    }

    println!();
    println!("Revenue by payment method");
    for (method, revenue) in revenue_by_payment_method(orders) {
        println!("  {:<20} {:>12}", method.as_str(), revenue.to_string());
    }

    println!();
    println!("Sales by day");
    for (day, revenue) in sales_by_day(orders) {
        println!("  {:<20} {:>12}", day.to_string(), revenue.to_string());
    }

    let inventory = InventorySummary::from_products(session.catalog().products(), low_stock_threshold);
    println!();
    println!("Inventory");
    println!("  Vehicles:            {}", inventory.product_count);
    println!("  Units in stock:      {}", inventory.units_in_stock);
    println!("  Stock value:         {}", inventory.stock_value);
    if inventory.low_stock.is_empty() {
        println!("  Low stock (<= {low_stock_threshold}):    none");
    } else {
        println!(
            "  Low stock (<= {low_stock_threshold}):    {}",
            inventory.low_stock.join(", ")
        );
    }
}
