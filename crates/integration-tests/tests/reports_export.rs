//! Reports and CSV exports over orders committed through the session.

#![allow(clippy::unwrap_used)]

use autopos_admin::services::{
    InventorySummary, SalesSummary, customers_csv, orders_csv, render_invoice, revenue_by_make,
};
use autopos_core::{CustomerId, PaymentMethod, Price, ProductId};
use autopos_integration_tests::TestDb;

#[test]
fn test_reports_follow_committed_orders() {
    let db = TestDb::new().unwrap();
    let mut session = db.seeded_session().unwrap();

    let corolla = session.catalog().find(&ProductId::new("C-0001")).unwrap().clone();
    let civic = session.catalog().find(&ProductId::new("C-0002")).unwrap().clone();

    session.cart_mut().add_line(&corolla, 2, None).unwrap();
    session.checkout(&CustomerId::new("CU-1"), PaymentMethod::Cash).unwrap();
    session.cart_mut().add_line(&civic, 1, None).unwrap();
    session.checkout(&CustomerId::new("CU-2"), PaymentMethod::Card).unwrap();

    let sales = SalesSummary::from_orders(session.orders().list());
    assert_eq!(sales.order_count, 2);
    assert_eq!(sales.units_sold, 3);
    // (39800 + 21950) * 1.1
    assert_eq!(sales.revenue, Price::from_units(67_925));

    let by_make = revenue_by_make(session.orders().list());
    assert_eq!(by_make[0], ("Toyota".to_string(), Price::from_units(39_800)));
    assert_eq!(by_make[1], ("Honda".to_string(), Price::from_units(21_950)));

    let inventory = InventorySummary::from_products(session.catalog().products(), 1);
    assert_eq!(inventory.product_count, 8);
    assert!(inventory.low_stock.contains(&"C-0001".to_string()));
    assert!(inventory.low_stock.contains(&"C-0002".to_string()));
}

#[test]
fn test_exports_and_invoice() {
    let db = TestDb::new().unwrap();
    let mut session = db.seeded_session().unwrap();
    let corolla = session.catalog().find(&ProductId::new("C-0001")).unwrap().clone();
    session.cart_mut().add_line(&corolla, 1, Some("black")).unwrap();
    let order = session.checkout(&CustomerId::new("CU-1"), PaymentMethod::Bank).unwrap();

    let csv = orders_csv(session.orders().list());
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains(order.id.as_str()));
    assert!(csv.contains(",bank,Paid"));

    let customers = customers_csv(session.customers().list());
    assert!(customers.contains("CU-1,Jane Doe,jane@example.com,0771234567,\"123 Main St, City\",1"));

    let customer = session.customers().find(&order.customer_id);
    let invoice = render_invoice(&order, customer);
    assert!(invoice.contains("Bill to:  Jane Doe (CU-1)"));
    assert!(invoice.contains("123 Main St, City"));
    assert!(invoice.contains("$21,890"));
}
