//! Checkout results.

use cart::{Money, Product};
use common::OrderId;
use serde::Serialize;

/// Placeholder for the real checkout step (payment, stock, ...).
///
/// Does nothing; the demo has no backend.
pub fn perform_checkout(_items: &[Product]) {}

/// What the success screen shows after a checkout.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutReceipt {
    /// Identifier generated for this order.
    pub order_id: OrderId,

    /// Amount charged.
    pub total: Money,

    /// Entries that were purchased.
    pub items: Vec<Product>,

    /// The recorded `purchase` event, as shown in the event log.
    pub purchase_json: String,
}

impl CheckoutReceipt {
    /// Returns the summed quantity of the purchased entries.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|p| u64::from(p.quantity())).sum()
    }
}
