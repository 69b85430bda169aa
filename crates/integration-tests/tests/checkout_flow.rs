//! Checkout against a file-backed database.
//!
//! Covers the sale scenarios end to end: totals, stock, purchase history and
//! the cart all land in storage, and a rejected checkout leaves every
//! document untouched.

#![allow(clippy::unwrap_used)]

use autopos_admin::db::{KeyValueStore, keys};
use autopos_admin::services::CheckoutError;
use autopos_core::{CustomerId, OrderStatus, PaymentMethod, Price, ProductId};
use autopos_integration_tests::TestDb;
use chrono::{TimeZone, Utc};

fn corolla() -> ProductId {
    ProductId::new("C-0001")
}

fn mustang() -> ProductId {
    ProductId::new("C-0003")
}

// =============================================================================
// Successful sales
// =============================================================================

#[test]
fn test_cash_sale_settles_every_store() {
    let db = TestDb::new().unwrap();
    let mut session = db.seeded_session().unwrap();

    let product = session.catalog().find(&corolla()).unwrap().clone();
    assert_eq!(product.stock, 3);
    session.cart_mut().add_line(&product, 2, Some("red")).unwrap();

    let placed_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let order = session
        .checkout_parts()
        .commit_at(&CustomerId::new("CU-1"), PaymentMethod::Cash, placed_at)
        .unwrap();

    assert_eq!(order.id.as_str(), "INV-1704110400000");
    assert_eq!(order.customer_name, "Jane Doe");
    assert_eq!(order.status, OrderStatus::Paid);
    assert_eq!(order.totals.subtotal, Price::from_units(39_800));
    assert_eq!(order.totals.tax, Price::from_units(3_980));
    assert_eq!(order.totals.total, Price::from_units(43_780));

    // A second connection sees everything the first one wrote.
    let reopened = db.session().unwrap();
    assert_eq!(reopened.catalog().find(&corolla()).unwrap().stock, 1);
    assert_eq!(
        reopened
            .customers()
            .find(&CustomerId::new("CU-1"))
            .unwrap()
            .purchase_history,
        [order.id.clone()]
    );
    assert!(reopened.cart().is_empty());
    assert_eq!(reopened.orders().list(), [order]);
}

#[test]
fn test_overselling_floors_stock_at_zero() {
    let db = TestDb::new().unwrap();
    let mut session = db.seeded_session().unwrap();

    let product = session.catalog().find(&mustang()).unwrap().clone();
    assert_eq!(product.stock, 1);
    session.cart_mut().add_line(&product, 3, None).unwrap();

    session
        .checkout(&CustomerId::new("CU-2"), PaymentMethod::Card)
        .unwrap();

    assert_eq!(session.catalog().find(&mustang()).unwrap().stock, 0);
    assert_eq!(db.session().unwrap().catalog().find(&mustang()).unwrap().stock, 0);
}

#[test]
fn test_color_variants_are_separate_lines_on_the_order() {
    let db = TestDb::new().unwrap();
    let mut session = db.seeded_session().unwrap();

    let product = session.catalog().find(&corolla()).unwrap().clone();
    session.cart_mut().add_line(&product, 1, Some("red")).unwrap();
    session.cart_mut().add_line(&product, 1, Some("white")).unwrap();
    assert_eq!(session.cart().len(), 2);

    let order = session
        .checkout(&CustomerId::new("CU-1"), PaymentMethod::Bank)
        .unwrap();

    let colors: Vec<&str> = order.items.iter().map(|l| l.selected_color.as_str()).collect();
    assert_eq!(colors, ["red", "white"]);
    assert_eq!(session.catalog().find(&corolla()).unwrap().stock, 1);
}

#[test]
fn test_orders_are_most_recent_first() {
    let db = TestDb::new().unwrap();
    let mut session = db.seeded_session().unwrap();
    let product = session.catalog().find(&corolla()).unwrap().clone();

    for (hour, customer) in [(9, "CU-1"), (10, "CU-2")] {
        session.cart_mut().add_line(&product, 1, None).unwrap();
        session
            .checkout_parts()
            .commit_at(
                &CustomerId::new(customer),
                PaymentMethod::Card,
                Utc.with_ymd_and_hms(2024, 2, 1, hour, 0, 0).unwrap(),
            )
            .unwrap();
    }

    let reopened = db.session().unwrap();
    let names: Vec<&str> = reopened
        .orders()
        .list()
        .iter()
        .map(|o| o.customer_name.as_str())
        .collect();
    assert_eq!(names, ["John Smith", "Jane Doe"]);
}

// =============================================================================
// Rejected checkouts
// =============================================================================

#[test]
fn test_unknown_customer_leaves_storage_untouched() {
    let db = TestDb::new().unwrap();
    let mut session = db.seeded_session().unwrap();
    let product = session.catalog().find(&corolla()).unwrap().clone();
    session.cart_mut().add_line(&product, 2, None).unwrap();

    let storage = db.store().unwrap();
    let before: Vec<Option<String>> = [keys::CART, keys::CARS, keys::CUSTOMERS, keys::ORDERS]
        .iter()
        .map(|key| storage.get(key).unwrap())
        .collect();

    let err = session
        .checkout(&CustomerId::new("CU-404"), PaymentMethod::Cash)
        .unwrap_err();
    assert!(matches!(err, CheckoutError::CustomerNotFound(_)));
    assert!(err.is_validation());

    let after: Vec<Option<String>> = [keys::CART, keys::CARS, keys::CUSTOMERS, keys::ORDERS]
        .iter()
        .map(|key| storage.get(key).unwrap())
        .collect();
    assert_eq!(before, after);
    assert_eq!(session.cart().unit_count(), 2);
}

#[test]
fn test_empty_cart_is_rejected() {
    let db = TestDb::new().unwrap();
    let mut session = db.seeded_session().unwrap();

    let err = session
        .checkout(&CustomerId::new("CU-1"), PaymentMethod::Cash)
        .unwrap_err();
    assert!(matches!(err, CheckoutError::EmptyCart));
    assert!(session.orders().is_empty());
}
