//! Cart store for the storefront analytics demo.
//!
//! This crate provides:
//! - [`Product`] catalog entries carrying a cart quantity
//! - [`Money`] amounts kept in integer cents
//! - [`Cart`], the ordered collection of selected products
//! - [`SharedCart`], a cloneable handle with a lazily created global instance
//! - [`total`], the totals calculator

pub mod cart;
pub mod error;
pub mod money;
pub mod product;
pub mod shared;
pub mod totals;

pub use cart::{Cart, QuantityChange};
pub use common::ProductId;
pub use error::{CartError, Result};
pub use money::Money;
pub use product::Product;
pub use shared::SharedCart;
pub use totals::total;
