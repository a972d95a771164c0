//! Cart error types.

use common::ProductId;
use thiserror::Error;

use crate::Money;

/// Errors that can occur when mutating the cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// An entry with the same product ID is already in the cart.
    #[error("Product already in cart: {product_id}")]
    DuplicateItem { product_id: ProductId },

    /// No entry with the given product ID is in the cart.
    #[error("Item not found: {product_id}")]
    ItemNotFound { product_id: String },

    /// Cart quantities must be at least 1.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Prices must not be negative.
    #[error("Invalid price: {price} (must not be negative)")]
    InvalidPrice { price: Money },
}

/// Result type for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;
