//! Products domain module.
//!
//! This crate contains the business rules for a single stocked product,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod currency;
pub mod price;
pub mod product;

pub use currency::CurrencyFormat;
pub use price::{MAX_PRICE, MIN_PRICE, Price};
pub use product::{
    MAX_PRODUCT_ID, MAX_QUANTITY, MIN_PRODUCT_ID, MIN_QUANTITY, Product, ProductId,
};
