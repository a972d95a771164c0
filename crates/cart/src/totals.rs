//! Cart totals.

use crate::{Money, Product};

/// Sums `price * quantity` over the given entries. Empty input totals zero.
pub fn total<'a>(items: impl IntoIterator<Item = &'a Product>) -> Money {
    items.into_iter().map(Product::line_total).sum()
}
