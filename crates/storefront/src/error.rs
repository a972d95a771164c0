//! Storefront error types.

use analytics::AnalyticsError;
use cart::CartError;
use thiserror::Error;

/// Errors that can occur while handling a storefront action.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The cart refused the change.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// The event could not be recorded.
    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),

    /// The product is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Checkout needs at least one item in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,
}

/// Result type for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;
