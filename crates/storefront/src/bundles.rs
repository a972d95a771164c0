//! Parameters for each storefront event.

use analytics::{EventParams, keys};
use cart::{Money, Product};
use common::OrderId;

/// `view_item` parameters: id, name, category and price of one product.
pub fn view_item(product: &Product) -> EventParams {
    EventParams::new()
        .with(keys::ITEM_ID, product.id().as_str())
        .with(keys::ITEM_NAME, product.name.as_str())
        .with(keys::ITEM_CATEGORY, product.category.as_str())
        .with(keys::PRICE, product.price().as_decimal())
}

/// `add_to_cart` parameters: the `view_item` keys plus a quantity of 1.
pub fn add_to_cart(product: &Product) -> EventParams {
    view_item(product).with(keys::QUANTITY, 1_u32)
}

/// `view_item_list` parameters.
///
/// Each product contributes its keys suffixed with its 1-based position,
/// e.g. `item_id_1`, `price_2`.
pub fn view_item_list(products: &[Product]) -> EventParams {
    let mut params = EventParams::new();
    for (index, product) in products.iter().enumerate() {
        let n = index + 1;
        params
            .insert(format!("{}_{n}", keys::ITEM_ID), product.id().as_str())
            .insert(format!("{}_{n}", keys::ITEM_NAME), product.name.as_str())
            .insert(format!("{}_{n}", keys::ITEM_CATEGORY), product.category.as_str())
            .insert(format!("{}_{n}", keys::PRICE), product.price().as_decimal());
    }
    params
}

/// One entry of an `items` list.
pub fn item(product: &Product) -> EventParams {
    EventParams::new()
        .with(keys::ITEM_ID, product.id().as_str())
        .with(keys::ITEM_NAME, product.name.as_str())
        .with(keys::ITEM_CATEGORY, product.category.as_str())
        .with(keys::PRICE, product.price().as_decimal())
        .with(keys::QUANTITY, product.quantity())
        .with(keys::ITEM_VARIANT, product.sku.as_str())
}

/// `view_cart` parameters: the cart entries as an `items` list.
pub fn view_cart(items: &[Product]) -> EventParams {
    EventParams::new().with(keys::ITEMS, items.iter().map(item).collect::<Vec<_>>())
}

/// Details of a completed purchase.
#[derive(Debug, Clone, Copy)]
pub struct Purchase<'a> {
    pub order_id: &'a OrderId,
    pub affiliation: &'a str,
    pub value: Money,
    pub currency: &'a str,
    pub items: &'a [Product],
}

/// `purchase` parameters.
pub fn purchase(purchase: Purchase<'_>) -> EventParams {
    EventParams::new()
        .with(keys::TRANSACTION_ID, purchase.order_id.as_str())
        .with(keys::AFFILIATION, purchase.affiliation)
        .with(keys::VALUE, purchase.value.as_decimal())
        .with(keys::CURRENCY, purchase.currency)
        .with(
            keys::ITEMS,
            purchase.items.iter().map(item).collect::<Vec<_>>(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::ParamValue;

    fn shoes() -> Product {
        Product::new("shoes_5", "Shoes", "Category B", Money::from_cents(7999), "shoes_5")
    }

    #[test]
    fn view_item_has_four_keys() {
        let params = view_item(&shoes());
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["item_id", "item_name", "item_category", "price"]);
        assert_eq!(params.get("price"), Some(&ParamValue::Double(79.99)));
    }

    #[test]
    fn add_to_cart_reports_quantity_one() {
        let product = shoes().with_quantity(4).unwrap();
        let params = add_to_cart(&product);
        assert_eq!(params.get("quantity"), Some(&ParamValue::Long(1)));
    }

    #[test]
    fn view_item_list_suffixes_positions() {
        let params = view_item_list(&[shoes(), shoes()]);
        assert_eq!(params.len(), 8);
        assert!(params.get("item_id_1").is_some());
        assert!(params.get("price_2").is_some());
        assert!(params.get("item_id").is_none());
    }

    #[test]
    fn item_carries_quantity_and_variant() {
        let params = item(&shoes().with_quantity(3).unwrap());
        assert_eq!(params.get("quantity"), Some(&ParamValue::Long(3)));
        assert_eq!(
            params.get("item_variant"),
            Some(&ParamValue::String("shoes_5".to_string()))
        );
    }

    #[test]
    fn view_cart_of_empty_cart_has_empty_items() {
        let params = view_cart(&[]);
        assert_eq!(params.get("items"), Some(&ParamValue::Items(Vec::new())));
    }

    #[test]
    fn purchase_has_transaction_fields_then_items() {
        let order_id = OrderId::generate();
        let items = [shoes()];
        let params = purchase(Purchase {
            order_id: &order_id,
            affiliation: "Store Name",
            value: Money::from_cents(7999),
            currency: "USD",
            items: &items,
        });

        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            ["transaction_id", "affiliation", "value", "currency", "items"]
        );
        assert_eq!(
            params.get("transaction_id"),
            Some(&ParamValue::String(order_id.to_string()))
        );
    }
}
