//! The demo product catalog.

use cart::{Money, Product};

/// Products on offer, in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from the given products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The three products of the demo store.
    pub fn demo() -> Self {
        Self::new(vec![
            Product::new(
                "blazer_red_m",
                "Blazer",
                "Category A",
                Money::from_cents(14999),
                "blazer_red_m",
            )
            .with_image("blazer_red"),
            Product::new(
                "shoes_5",
                "Shoes",
                "Category B",
                Money::from_cents(7999),
                "shoes_5",
            )
            .with_image("shoes"),
            Product::new(
                "tshirt_l",
                "T-Shirt",
                "Category C",
                Money::from_cents(3099),
                "tshirt_l",
            )
            .with_image("tshirt"),
        ])
    }

    /// Returns all products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the product with the given ID.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == product_id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}
