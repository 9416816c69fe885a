//! Demo configuration, read from `STOCKROOM_*` environment variables.

use rust_decimal::Decimal;
use stockroom_core::DomainResult;
use stockroom_products::{CurrencyFormat, Product};
use thiserror::Error;

pub const CURRENCY_SYMBOL_ENV: &str = "STOCKROOM_CURRENCY_SYMBOL";
pub const GROUP_SEPARATOR_ENV: &str = "STOCKROOM_GROUP_SEPARATOR";
pub const DECIMAL_SEPARATOR_ENV: &str = "STOCKROOM_DECIMAL_SEPARATOR";
pub const DEMO_QTY_ENV: &str = "STOCKROOM_DEMO_QTY";

/// Stock adjustment applied by the demo when `STOCKROOM_DEMO_QTY` is unset.
pub const DEFAULT_DEMO_QTY: i64 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an integer, got {value:?}")]
    NotAnInteger { var: &'static str, value: String },
}

/// Inputs for the product the demo builds. Defaults to 5 "Books" at 20.00.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleProduct {
    pub product_id: i64,
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
}

impl Default for SampleProduct {
    fn default() -> Self {
        Self {
            product_id: 5,
            name: "Books".to_string(),
            price: Decimal::new(2000, 2),
            quantity: 5,
        }
    }
}

impl SampleProduct {
    pub fn build(&self) -> DomainResult<Product> {
        Product::create(self.product_id, self.name.clone(), self.price, self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub currency: CurrencyFormat,
    /// Units added and then removed by the demo.
    pub adjust_qty: i64,
    pub sample: SampleProduct,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyFormat::default(),
            adjust_qty: DEFAULT_DEMO_QTY,
            sample: SampleProduct::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Unset keys fall back to
    /// defaults; empty separator values are honored (no grouping).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CurrencyFormat::default();
        let currency = CurrencyFormat::new(
            lookup(CURRENCY_SYMBOL_ENV).unwrap_or(defaults.symbol),
            lookup(GROUP_SEPARATOR_ENV).unwrap_or(defaults.group_separator),
            lookup(DECIMAL_SEPARATOR_ENV).unwrap_or(defaults.decimal_separator),
        );

        let adjust_qty = match lookup(DEMO_QTY_ENV) {
            None => DEFAULT_DEMO_QTY,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::NotAnInteger {
                var: DEMO_QTY_ENV,
                value: raw.clone(),
            })?,
        };

        Ok(Self {
            currency,
            adjust_qty,
            sample: SampleProduct::default(),
        })
    }
}
