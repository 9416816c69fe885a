use core::str::FromStr;

use rust_decimal::Decimal;
use stockroom_core::{DomainError, DomainResult, ValueObject, guard};

/// Lowest accepted unit price.
pub const MIN_PRICE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Highest accepted unit price.
pub const MAX_PRICE: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

pub(crate) const PRICE_OUT_OF_RANGE: &str = "Price is out of the range";

/// Unit price, a fixed-point decimal in `[5, 5000]`.
///
/// The value is stored exactly as given (no rounding); rounding only happens
/// when rendering through [`CurrencyFormat`](crate::CurrencyFormat).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        guard::ensure_within(&amount, &MIN_PRICE, &MAX_PRICE, PRICE_OUT_OF_RANGE)?;
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for Price {}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| DomainError::invalid_value(format!("Price is not a valid decimal: {e}")))?;
        Self::new(amount)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
