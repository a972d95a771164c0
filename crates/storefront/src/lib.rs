//! Storefront wiring for the analytics demo.
//!
//! Ties the cart store, the event recorder and an analytics sink together
//! behind [`StorefrontHandler`], and builds the parameters for each
//! e-commerce event the storefront raises.

pub mod bundles;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod session;

pub use catalog::Catalog;
pub use checkout::{CheckoutReceipt, perform_checkout};
pub use config::Config;
pub use error::{Result, StorefrontError};
pub use session::{CartView, QuantityAction, StorefrontHandler, StorefrontSession};
