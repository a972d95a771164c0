//! Shared cart handle and the process-wide instance.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::{Cart, Money, Product, QuantityChange, Result};

static GLOBAL_CART: Lazy<SharedCart> = Lazy::new(SharedCart::new);

/// Cloneable handle to a [`Cart`].
///
/// Clones point at the same cart. Reads hand back copies of the entries;
/// use [`SharedCart::update`] to work on the live cart.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    inner: Arc<RwLock<Cart>>,
}

impl SharedCart {
    /// Creates a handle to a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide cart, creating it on first access.
    ///
    /// Concurrent first calls still produce a single cart.
    pub fn global() -> Self {
        GLOBAL_CART.clone()
    }

    /// Returns true if both handles point at the same cart.
    pub fn same_cart(&self, other: &SharedCart) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Runs `f` with read access to the cart.
    pub fn read<T>(&self, f: impl FnOnce(&Cart) -> T) -> T {
        f(&self.inner.read())
    }

    /// Runs `f` with write access to the cart.
    pub fn update<T>(&self, f: impl FnOnce(&mut Cart) -> T) -> T {
        f(&mut self.inner.write())
    }

    /// See [`Cart::add`].
    pub fn add(&self, product: Product) -> Result<()> {
        self.update(|cart| cart.add(product))
    }

    /// See [`Cart::add_or_increment`].
    pub fn add_or_increment(&self, product: Product) -> Result<u32> {
        self.update(|cart| cart.add_or_increment(product))
    }

    /// Returns a copy of the entry with the given product ID.
    pub fn find(&self, product_id: impl AsRef<str>) -> Option<Product> {
        self.read(|cart| cart.find(product_id).cloned())
    }

    /// See [`Cart::remove`].
    pub fn remove(&self, product_id: impl AsRef<str>) -> Option<Product> {
        self.update(|cart| cart.remove(product_id))
    }

    /// See [`Cart::clear`].
    pub fn clear(&self) {
        self.update(Cart::clear)
    }

    /// Returns a copy of the entries in insertion order.
    pub fn items(&self) -> Vec<Product> {
        self.read(|cart| cart.items().to_vec())
    }

    /// See [`Cart::increment`].
    pub fn increment(&self, product_id: impl AsRef<str>) -> Result<QuantityChange> {
        self.update(|cart| cart.increment(product_id))
    }

    /// See [`Cart::decrement`].
    pub fn decrement(&self, product_id: impl AsRef<str>) -> Result<QuantityChange> {
        self.update(|cart| cart.decrement(product_id))
    }

    /// See [`Cart::set_quantity`].
    pub fn set_quantity(&self, product_id: impl AsRef<str>, quantity: u32) -> Result<QuantityChange> {
        self.update(|cart| cart.set_quantity(product_id, quantity))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.read(Cart::len)
    }

    /// Returns true if the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.read(Cart::is_empty)
    }

    /// Returns the cart total.
    pub fn total(&self) -> Money {
        self.read(Cart::total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn product(id: &str) -> Product {
        Product::new(id, id, "Category", Money::from_cents(100), id)
    }

    #[test]
    fn clones_share_the_same_cart() {
        let cart = SharedCart::new();
        let other = cart.clone();

        cart.add(product("a")).unwrap();
        assert_eq!(other.len(), 1);
        assert!(cart.same_cart(&other));
        assert!(!cart.same_cart(&SharedCart::new()));
    }

    #[test]
    fn update_mutates_live_entries() {
        let cart = SharedCart::new();
        cart.add(product("a")).unwrap();

        cart.update(|c| c.find_mut("a").unwrap().name = "Renamed".to_string());
        assert_eq!(cart.find("a").unwrap().name, "Renamed");
    }

    #[test]
    #[serial]
    fn global_returns_one_instance() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(SharedCart::global))
            .collect();
        let carts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for cart in &carts {
            assert!(cart.same_cart(&SharedCart::global()));
        }
    }

    #[test]
    #[serial]
    fn global_cart_is_cleared_not_replaced() {
        let cart = SharedCart::global();
        cart.clear();
        cart.add(product("global_item")).unwrap();

        SharedCart::global().clear();
        assert!(cart.is_empty());
        assert!(cart.same_cart(&SharedCart::global()));
    }
}
