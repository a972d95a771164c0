//! Shared identifier types for the storefront analytics demo.

pub mod types;

pub use types::{ORDER_ID_LEN, OrderId, ProductId};
