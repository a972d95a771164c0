//! Catalog products and their cart quantity.

use std::num::NonZeroU32;

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::{CartError, Money, Result};

/// A purchasable item.
///
/// The catalog fields identify the item; `quantity` is how many of it the
/// shopper wants and is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog key. Cart lookups go through this.
    id: ProductId,

    /// Human-readable product name.
    pub name: String,

    /// Catalog category.
    pub category: String,

    /// Price per unit.
    price: Money,

    /// Stock keeping unit, reported as the item variant.
    pub sku: String,

    /// Optional image reference for display layers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default = "one")]
    quantity: NonZeroU32,
}

fn one() -> NonZeroU32 {
    NonZeroU32::MIN
}

impl Product {
    /// Creates a new product with a quantity of 1.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        sku: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            sku: sku.into(),
            image: None,
            quantity: one(),
        }
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Returns the product with the given quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Result<Self> {
        self.quantity = NonZeroU32::new(quantity).ok_or(CartError::InvalidQuantity { quantity })?;
        Ok(self)
    }

    /// Returns the catalog key.
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Returns the price per unit.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Changes the price per unit. Negative prices are rejected.
    pub fn set_price(&mut self, price: Money) -> Result<()> {
        if price.is_negative() {
            return Err(CartError::InvalidPrice { price });
        }
        self.price = price;
        Ok(())
    }

    /// Returns the cart quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Returns the price for this entry (price * quantity).
    pub fn line_total(&self) -> Money {
        self.price.multiply(self.quantity())
    }

    pub(crate) fn set_quantity(&mut self, quantity: NonZeroU32) {
        self.quantity = quantity;
    }
}
