//! Analytics events and the e-commerce vocabulary they use.

use serde::Serialize;

use crate::{AnalyticsError, EventParams, Result};

/// Recommended e-commerce event names.
pub mod names {
    pub const VIEW_ITEM_LIST: &str = "view_item_list";
    pub const VIEW_ITEM: &str = "view_item";
    pub const ADD_TO_CART: &str = "add_to_cart";
    pub const VIEW_CART: &str = "view_cart";
    pub const PURCHASE: &str = "purchase";
}

/// Recommended e-commerce parameter keys.
pub mod keys {
    pub const ITEM_ID: &str = "item_id";
    pub const ITEM_NAME: &str = "item_name";
    pub const ITEM_CATEGORY: &str = "item_category";
    pub const ITEM_VARIANT: &str = "item_variant";
    pub const PRICE: &str = "price";
    pub const QUANTITY: &str = "quantity";
    pub const ITEMS: &str = "items";
    pub const TRANSACTION_ID: &str = "transaction_id";
    pub const AFFILIATION: &str = "affiliation";
    pub const VALUE: &str = "value";
    pub const CURRENCY: &str = "currency";
}

/// A named, parameterized record of a user action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    name: String,
    params: EventParams,
}

impl AnalyticsEvent {
    /// Creates an event. The name must not be empty.
    pub fn new(name: impl Into<String>, params: EventParams) -> Result<Self> {
        let name = name.into();
        check_name(&name)?;
        Ok(Self { name, params })
    }

    /// Returns the event name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the event parameters.
    pub fn params(&self) -> &EventParams {
        &self.params
    }
}

/// Rejects empty and whitespace-only event names.
pub(crate) fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AnalyticsError::EmptyEventName);
    }
    Ok(())
}
