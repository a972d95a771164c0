//! Integration tests for the cart store.
//!
//! These tests drive the cart the way the storefront does: adding from the
//! catalog, adjusting quantities and clearing after checkout.

use cart::{Cart, CartError, Money, Product, QuantityChange, SharedCart, total};

fn catalog() -> Vec<Product> {
    vec![
        Product::new("blazer_red_m", "Blazer", "Category A", Money::from_cents(14999), "blazer_red_m"),
        Product::new("shoes_5", "Shoes", "Category B", Money::from_cents(7999), "shoes_5"),
        Product::new("tshirt_l", "T-Shirt", "Category C", Money::from_cents(3099), "tshirt_l"),
    ]
}

mod store_contract {
    use super::*;

    #[test]
    fn size_tracks_adds_minus_successful_removes() {
        let mut cart = Cart::new();
        let mut adds = 0;
        let mut removes = 0;

        for product in catalog() {
            cart.add(product).unwrap();
            adds += 1;
        }

        for id in ["shoes_5", "missing", "shoes_5", "tshirt_l"] {
            if cart.remove(id).is_some() {
                removes += 1;
            }
        }

        assert_eq!(cart.len(), adds - removes);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn find_after_add_returns_same_id() {
        let mut cart = Cart::new();
        for product in catalog() {
            let id = product.id().clone();
            cart.add(product).unwrap();
            assert_eq!(cart.find(&id).unwrap().id(), &id);
        }
    }

    #[test]
    fn clear_leaves_nothing_to_find() {
        let mut cart = Cart::new();
        for product in catalog() {
            cart.add(product).unwrap();
        }

        cart.clear();
        assert!(cart.items().is_empty());
        for product in catalog() {
            assert!(cart.find(product.id()).is_none());
        }
    }

    #[test]
    fn decrement_from_one_never_leaves_zero() {
        let mut cart = Cart::new();
        for product in catalog() {
            cart.add(product).unwrap();
        }

        for product in catalog() {
            let change = cart.decrement(product.id()).unwrap();
            assert!(matches!(change, QuantityChange::Removed(_)));
        }

        assert!(cart.is_empty());
        assert!(cart.items().iter().all(|p| p.quantity() >= 1));
    }

    #[test]
    fn increment_unknown_product_is_not_found() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.increment("ghost"),
            Err(CartError::ItemNotFound { .. })
        ));
    }
}

mod totals {
    use super::*;

    #[test]
    fn empty_cart_totals_zero() {
        assert!(total(Cart::new().items()).is_zero());
    }

    #[test]
    fn ten_times_two_plus_five_is_twenty_five() {
        let mut cart = Cart::new();
        cart.add(
            Product::new("a", "A", "X", Money::from_cents(1000), "a")
                .with_quantity(2)
                .unwrap(),
        )
        .unwrap();
        cart.add(Product::new("b", "B", "X", Money::from_cents(500), "b"))
            .unwrap();

        assert_eq!(cart.total(), Money::from_cents(2500));
        assert_eq!(cart.total().to_string(), "$25.00");
    }

    #[test]
    fn total_follows_quantity_changes() {
        let mut cart = Cart::new();
        for product in catalog() {
            cart.add_or_increment(product).unwrap();
        }
        assert_eq!(cart.total().cents(), 14999 + 7999 + 3099);

        cart.increment("tshirt_l").unwrap();
        cart.decrement("blazer_red_m").unwrap();
        assert_eq!(cart.total().cents(), 7999 + 3099 * 2);
    }
}

mod shared_handle {
    use super::*;

    #[test]
    fn concurrent_adds_through_clones_all_land() {
        let cart = SharedCart::new();
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let cart = cart.clone();
                std::thread::spawn(move || {
                    cart.add(Product::new(
                        format!("p{i}"),
                        "Item",
                        "X",
                        Money::from_cents(100),
                        format!("p{i}"),
                    ))
                    .unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cart.len(), 16);
        assert_eq!(cart.total().cents(), 1600);
    }
}
