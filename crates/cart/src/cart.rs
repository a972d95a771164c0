//! The cart store.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CartError, Money, Product, Result, totals};

/// Outcome of a quantity change on a cart entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    /// The entry is still in the cart with a new quantity.
    Updated { old_quantity: u32, new_quantity: u32 },

    /// The entry dropped below 1 and was taken out of the cart.
    Removed(Product),
}

impl QuantityChange {
    /// Returns the entry's quantity after the change, 0 if it was removed.
    pub fn new_quantity(&self) -> u32 {
        match self {
            Self::Updated { new_quantity, .. } => *new_quantity,
            Self::Removed(_) => 0,
        }
    }
}

/// Products a shopper intends to purchase, in the order they were added.
///
/// Every entry has a distinct product ID and a quantity of at least 1.
/// Lowering an entry's quantity below 1 removes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Product>,
}

// Query methods
impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entries in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Returns the first entry with the given product ID.
    pub fn find(&self, product_id: impl AsRef<str>) -> Option<&Product> {
        let product_id = product_id.as_ref();
        self.items.iter().find(|p| p.id() == product_id)
    }

    /// Returns a mutable reference to the entry with the given product ID.
    ///
    /// The product ID and quantity are not writable through this reference,
    /// and [`Product::set_price`] rejects negative prices, so entries keep
    /// their distinct IDs and non-negative totals.
    pub fn find_mut(&mut self, product_id: impl AsRef<str>) -> Option<&mut Product> {
        let product_id = product_id.as_ref();
        self.items.iter_mut().find(|p| p.id() == product_id)
    }

    /// Returns the number of distinct entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the summed quantity of all entries.
    ///
    /// Widened to `u64` so that many entries near `u32::MAX` cannot overflow.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|p| u64::from(p.quantity())).sum()
    }

    /// Returns the cart total (sum of price * quantity).
    pub fn total(&self) -> Money {
        totals::total(&self.items)
    }
}

// Mutation methods
impl Cart {
    /// Appends a product to the cart.
    ///
    /// Rejects a product whose ID is already present; use
    /// [`Cart::add_or_increment`] to merge instead.
    pub fn add(&mut self, product: Product) -> Result<()> {
        if product.price().is_negative() {
            return Err(CartError::InvalidPrice {
                price: product.price(),
            });
        }

        if self.find(product.id()).is_some() {
            return Err(CartError::DuplicateItem {
                product_id: product.id().clone(),
            });
        }

        debug!(product_id = %product.id(), quantity = product.quantity(), "item added to cart");
        metrics::counter!("cart_items_added_total").increment(1);
        self.items.push(product);
        Ok(())
    }

    /// Adds the product, or bumps the quantity of the existing entry by one.
    ///
    /// Returns the entry's quantity afterwards.
    pub fn add_or_increment(&mut self, product: Product) -> Result<u32> {
        if self.find(product.id()).is_some() {
            return Ok(self.increment(product.id())?.new_quantity());
        }

        let quantity = product.quantity();
        self.add(product)?;
        Ok(quantity)
    }

    /// Removes the entry with the given product ID.
    ///
    /// Returns the removed entry, or `None` when nothing matched.
    pub fn remove(&mut self, product_id: impl AsRef<str>) -> Option<Product> {
        let product_id = product_id.as_ref();
        let index = self.items.iter().position(|p| p.id() == product_id)?;
        let removed = self.items.remove(index);

        debug!(product_id = %removed.id(), "item removed from cart");
        metrics::counter!("cart_items_removed_total").increment(1);
        Some(removed)
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        debug!(entries = self.items.len(), "cart cleared");
        self.items.clear();
    }

    /// Raises the quantity of an entry by one.
    ///
    /// The quantity saturates at `u32::MAX`; at the cap the returned change
    /// has equal old and new quantities.
    pub fn increment(&mut self, product_id: impl AsRef<str>) -> Result<QuantityChange> {
        let product_id = product_id.as_ref();
        let entry = self
            .find_mut(product_id)
            .ok_or_else(|| CartError::ItemNotFound {
                product_id: product_id.to_string(),
            })?;

        let old_quantity = entry.quantity();
        let new_quantity = old_quantity.saturating_add(1);
        entry.set_quantity(NonZeroU32::new(new_quantity).unwrap_or(NonZeroU32::MAX));
        debug!(product_id, old_quantity, new_quantity, "item quantity increased");

        Ok(QuantityChange::Updated {
            old_quantity,
            new_quantity,
        })
    }

    /// Lowers the quantity of an entry by one, removing it at quantity 1.
    pub fn decrement(&mut self, product_id: impl AsRef<str>) -> Result<QuantityChange> {
        let product_id = product_id.as_ref();
        let current = self
            .find(product_id)
            .map(Product::quantity)
            .ok_or_else(|| CartError::ItemNotFound {
                product_id: product_id.to_string(),
            })?;

        self.set_quantity(product_id, current - 1)
    }

    /// Sets the quantity of an entry. A quantity of 0 removes the entry.
    pub fn set_quantity(
        &mut self,
        product_id: impl AsRef<str>,
        quantity: u32,
    ) -> Result<QuantityChange> {
        let product_id = product_id.as_ref();

        let Some(new_quantity) = NonZeroU32::new(quantity) else {
            return self
                .remove(product_id)
                .map(QuantityChange::Removed)
                .ok_or_else(|| CartError::ItemNotFound {
                    product_id: product_id.to_string(),
                });
        };

        let entry = self
            .find_mut(product_id)
            .ok_or_else(|| CartError::ItemNotFound {
                product_id: product_id.to_string(),
            })?;

        let old_quantity = entry.quantity();
        entry.set_quantity(new_quantity);
        debug!(product_id, old_quantity, new_quantity = quantity, "item quantity set");

        Ok(QuantityChange::Updated {
            old_quantity,
            new_quantity: quantity,
        })
    }
}
