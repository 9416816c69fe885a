//! Black-box scenarios against the public products API.

use rust_decimal::Decimal;
use stockroom_core::{DomainError, ErrorKind};
use stockroom_products::Product;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn assert_range(err: DomainError, msg: &str) {
    assert_eq!(err.kind(), ErrorKind::Range, "unexpected kind for {err:?}");
    assert!(err.to_string().contains(msg), "{err} does not mention {msg}");
}

#[test]
fn product_id_above_maximum_is_rejected() {
    let err = Product::create(50_001, "Laptop", dec("999.99"), 50).unwrap_err();
    assert_range(err, "ProductId is out of the range");
}

#[test]
fn whitespace_name_is_rejected() {
    let err = Product::create(100, " ", dec("999.99"), 50).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert!(err.to_string().contains("Product Name cannot be null or empty"));
}

#[test]
fn price_above_maximum_is_rejected() {
    let err = Product::create(100, "Laptop", dec("5001"), 50).unwrap_err();
    assert_range(err, "Price is out of the range");
}

#[test]
fn quantity_above_maximum_is_rejected() {
    let err = Product::create(100, "Laptop", dec("999.99"), 500_001).unwrap_err();
    assert_range(err, "Quantity is out of the range");
}

#[test]
fn increase_past_ceiling_is_rejected() {
    let mut product = Product::create(100, "Laptop", dec("999.99"), 500_000).unwrap();
    let err = product.increase_stock(1).unwrap_err();
    assert_range(err, "Quantity cannot be above 500000.");
}

#[test]
fn decrease_past_floor_is_rejected() {
    let mut product = Product::create(100, "Laptop", dec("999.99"), 5).unwrap();
    let err = product.decrease_stock(1).unwrap_err();
    assert_range(err, "Quantity cannot be below 5.");
}

#[test]
fn increase_then_describe() {
    let mut product = Product::create(100, "Test Product", dec("50"), 100).unwrap();
    product.increase_stock(50).unwrap();
    assert!(product.describe().contains("Quantity: 150"));
}

#[test]
fn valid_product_describes_its_id_and_name() {
    let product = Product::create(100, "Valid Product Name", dec("50"), 100).unwrap();
    let text = product.describe();
    assert!(text.contains("Product ID: 100"));
    assert!(text.contains("Name: Valid Product Name"));
}

#[test]
fn zero_adjustments_are_no_ops() {
    let mut product = Product::create(50, "Oranges", dec("100"), 700).unwrap();
    product.increase_stock(0).unwrap();
    product.decrease_stock(0).unwrap();
    assert_eq!(product.quantity(), 700);
}

#[test]
fn demo_sequence() {
    let mut product = Product::create(5, "Books", dec("20.00"), 5).unwrap();
    assert_eq!(product.describe(), "Product ID: 5, Name: Books, Price: $20.00, Quantity: 5");

    product.increase_stock(5).unwrap();
    assert_eq!(product.describe(), "Product ID: 5, Name: Books, Price: $20.00, Quantity: 10");

    product.decrease_stock(5).unwrap();
    assert_eq!(product.describe(), "Product ID: 5, Name: Books, Price: $20.00, Quantity: 5");
}
