use rust_decimal::Decimal;
use stockroom_core::{DomainError, DomainResult, Entity, guard};

use crate::currency::CurrencyFormat;
use crate::price::Price;

/// Lowest accepted product identifier.
pub const MIN_PRODUCT_ID: i64 = 5;

/// Highest accepted product identifier.
pub const MAX_PRODUCT_ID: i64 = 50_000;

/// Lowest stock level a product may hold.
pub const MIN_QUANTITY: i64 = 5;

/// Highest stock level a product may hold.
pub const MAX_QUANTITY: i64 = 500_000;

const PRODUCT_ID_OUT_OF_RANGE: &str = "ProductId is out of the range";
const NAME_BLANK: &str = "Product Name cannot be null or empty";
const QUANTITY_OUT_OF_RANGE: &str = "Quantity is out of the range";
const INCREMENT_NEGATIVE: &str = "Increment must be positive.";
const DECREMENT_NEGATIVE: &str = "Decrement must be positive.";
const QUANTITY_ABOVE_MAX: &str = "Quantity cannot be above 500000.";
const QUANTITY_BELOW_MIN: &str = "Quantity cannot be below 5.";

/// Product identifier, an integer in `[5, 50000]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u32);

impl ProductId {
    pub fn new(value: i64) -> DomainResult<Self> {
        guard::ensure_within(&value, &MIN_PRODUCT_ID, &MAX_PRODUCT_ID, PRODUCT_ID_OUT_OF_RANGE)?;
        let value = u32::try_from(value)
            .map_err(|_| DomainError::out_of_range(PRODUCT_ID_OUT_OF_RANGE))?;
        Ok(Self(value))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A stocked product.
///
/// Identifier, name and price are fixed at construction. Stock only moves
/// through [`Product::increase_stock`] / [`Product::decrease_stock`], and always
/// stays within `[MIN_QUANTITY, MAX_QUANTITY]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    quantity: i64,
}

impl Product {
    /// Validate and build a product.
    ///
    /// Checks run in a fixed order and the first failing one is reported:
    /// identifier, name, price, quantity. The name is stored as given, without
    /// trimming.
    pub fn create(
        product_id: i64,
        product_name: impl Into<String>,
        price: Decimal,
        quantity: i64,
    ) -> DomainResult<Self> {
        let id = ProductId::new(product_id)?;

        let name = product_name.into();
        guard::ensure_not_blank(&name, NAME_BLANK)?;

        let price = Price::new(price)?;
        guard::ensure_within(&quantity, &MIN_QUANTITY, &MAX_QUANTITY, QUANTITY_OUT_OF_RANGE)?;

        tracing::debug!(product_id = %id, %price, quantity, "product created");

        Ok(Self {
            id,
            name,
            price,
            quantity,
        })
    }

    /// Same as [`Product::create`], for callers whose name may be absent.
    /// `None` is rejected like a blank name.
    pub fn create_optional(
        product_id: i64,
        product_name: Option<String>,
        price: Decimal,
        quantity: i64,
    ) -> DomainResult<Self> {
        let id = ProductId::new(product_id)?;
        let name = product_name.ok_or_else(|| DomainError::invalid_value(NAME_BLANK))?;
        Self::create(i64::from(id.get()), name, price, quantity)
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Add `qty` units. Zero is accepted and leaves stock unchanged.
    pub fn increase_stock(&mut self, qty: i64) -> DomainResult<()> {
        guard::ensure_non_negative(qty, INCREMENT_NEGATIVE).inspect_err(|_| {
            tracing::debug!(product_id = %self.id, qty, "rejected negative increment");
        })?;

        let new_quantity = self.quantity.saturating_add(qty);
        if new_quantity > MAX_QUANTITY {
            tracing::debug!(product_id = %self.id, qty, quantity = self.quantity, "increment exceeds stock ceiling");
            return Err(DomainError::out_of_range(QUANTITY_ABOVE_MAX));
        }

        self.quantity = new_quantity;
        tracing::debug!(product_id = %self.id, qty, quantity = self.quantity, "stock increased");
        Ok(())
    }

    /// Remove `qty` units. Zero is accepted and leaves stock unchanged.
    pub fn decrease_stock(&mut self, qty: i64) -> DomainResult<()> {
        guard::ensure_non_negative(qty, DECREMENT_NEGATIVE).inspect_err(|_| {
            tracing::debug!(product_id = %self.id, qty, "rejected negative decrement");
        })?;

        // qty >= 0 and quantity <= MAX_QUANTITY, so this cannot underflow.
        let new_quantity = self.quantity - qty;
        if new_quantity < MIN_QUANTITY {
            tracing::debug!(product_id = %self.id, qty, quantity = self.quantity, "decrement goes below stock floor");
            return Err(DomainError::out_of_range(QUANTITY_BELOW_MIN));
        }

        self.quantity = new_quantity;
        tracing::debug!(product_id = %self.id, qty, quantity = self.quantity, "stock decreased");
        Ok(())
    }

    /// Human-readable summary using the default (`$`) currency format.
    pub fn describe(&self) -> String {
        self.describe_with(&CurrencyFormat::default())
    }

    pub fn describe_with(&self, currency: &CurrencyFormat) -> String {
        format!(
            "Product ID: {}, Name: {}, Price: {}, Quantity: {}",
            self.id,
            self.name,
            currency.format(self.price.amount()),
            self.quantity
        )
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}
