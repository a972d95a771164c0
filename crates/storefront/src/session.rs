//! Storefront session: the composition root for user actions.

use analytics::{AnalyticsEvent, AnalyticsSink, EventParams, EventRecorder, names};
use async_trait::async_trait;
use cart::{Money, Product, QuantityChange, SharedCart};
use common::OrderId;
use tracing::{info, warn};

use crate::bundles::{self, Purchase};
use crate::checkout::{CheckoutReceipt, perform_checkout};
use crate::{Catalog, Config, Result, StorefrontError};

/// Direction of a quantity change from the cart screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityAction {
    Increase,
    Decrease,
}

/// User actions that change cart state.
#[async_trait]
pub trait StorefrontHandler: Send + Sync {
    /// Adds one unit of a catalog product to the cart. Returns its new quantity.
    async fn on_add_to_cart(&self, product_id: &str) -> Result<u32>;

    /// Buys everything in the cart and empties it.
    async fn on_checkout(&self) -> Result<CheckoutReceipt>;

    /// Raises or lowers the quantity of a cart entry. Lowering an entry at
    /// quantity 1 removes it.
    async fn on_quantity_change(
        &self,
        product_id: &str,
        action: QuantityAction,
    ) -> Result<QuantityChange>;
}

/// Cart contents as shown on the cart screen.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<Product>,
    pub total: Money,
}

/// State for one running storefront: catalog, cart, event log and the
/// analytics backend.
///
/// Handlers record every event in the log and forward it to the sink.
pub struct StorefrontSession<S: AnalyticsSink> {
    config: Config,
    catalog: Catalog,
    cart: SharedCart,
    recorder: EventRecorder,
    sink: S,
}

impl<S: AnalyticsSink> StorefrontSession<S> {
    /// Creates a session with its own empty cart and event log.
    pub fn new(config: Config, sink: S) -> Self {
        Self::with_state(config, Catalog::demo(), SharedCart::new(), EventRecorder::default(), sink)
    }

    /// Creates a session on the process-wide cart and event log.
    pub fn with_global_state(config: Config, sink: S) -> Self {
        Self::with_state(
            config,
            Catalog::demo(),
            SharedCart::global(),
            EventRecorder::global(),
            sink,
        )
    }

    /// Creates a session from explicit parts.
    pub fn with_state(
        config: Config,
        catalog: Catalog,
        cart: SharedCart,
        recorder: EventRecorder,
        sink: S,
    ) -> Self {
        Self {
            config,
            catalog,
            cart,
            recorder,
            sink,
        }
    }

    /// Returns the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the cart handle.
    pub fn cart(&self) -> &SharedCart {
        &self.cart
    }

    /// Returns the event recorder.
    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }

    /// Returns the analytics sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the current cart total.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    /// Shows the catalog and records `view_item_list`.
    #[tracing::instrument(skip(self))]
    pub async fn on_view_item_list(&self) -> Result<Vec<Product>> {
        let products = self.catalog.products().to_vec();
        self.log_event(names::VIEW_ITEM_LIST, bundles::view_item_list(&products))
            .await?;
        Ok(products)
    }

    /// Shows one product and records `view_item`.
    #[tracing::instrument(skip(self))]
    pub async fn on_view_item(&self, product_id: &str) -> Result<Product> {
        let product = self.catalog_product(product_id)?;
        self.log_event(names::VIEW_ITEM, bundles::view_item(&product))
            .await?;
        Ok(product)
    }

    /// Shows the cart and records `view_cart`.
    #[tracing::instrument(skip(self))]
    pub async fn on_view_cart(&self) -> Result<CartView> {
        let items = self.cart.items();
        let total = cart::total(&items);
        self.log_event(names::VIEW_CART, bundles::view_cart(&items))
            .await?;
        Ok(CartView { items, total })
    }

    fn catalog_product(&self, product_id: &str) -> Result<Product> {
        self.catalog
            .get(product_id)
            .cloned()
            .ok_or_else(|| StorefrontError::UnknownProduct(product_id.to_string()))
    }

    /// Records the event locally and forwards it to the sink.
    ///
    /// A failing sink is logged and otherwise ignored; the action that raised
    /// the event still goes through.
    async fn log_event(&self, name: &str, params: EventParams) -> Result<String> {
        let event = AnalyticsEvent::new(name, params)?;

        if let Err(e) = self.sink.log_event(&event).await {
            warn!(event_name = name, error = %e, "analytics sink rejected event");
        }

        Ok(self.recorder.append_event(&event)?)
    }
}

#[async_trait]
impl<S: AnalyticsSink> StorefrontHandler for StorefrontSession<S> {
    #[tracing::instrument(skip(self))]
    async fn on_add_to_cart(&self, product_id: &str) -> Result<u32> {
        let product = self.catalog_product(product_id)?;
        let quantity = self.cart.add_or_increment(product.clone())?;

        self.log_event(names::ADD_TO_CART, bundles::add_to_cart(&product))
            .await?;
        Ok(quantity)
    }

    #[tracing::instrument(skip(self))]
    async fn on_checkout(&self) -> Result<CheckoutReceipt> {
        let items = self.cart.items();
        if items.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }

        perform_checkout(&items);

        let order_id = OrderId::generate();
        let total = cart::total(&items);
        let params = bundles::purchase(Purchase {
            order_id: &order_id,
            affiliation: &self.config.affiliation,
            value: total,
            currency: &self.config.currency,
            items: &items,
        });
        let purchase_json = self.log_event(names::PURCHASE, params).await?;

        self.cart.clear();

        metrics::counter!("checkouts_total").increment(1);
        metrics::histogram!("checkout_value").record(total.as_decimal());
        info!(%order_id, %total, entries = items.len(), "checkout completed");

        Ok(CheckoutReceipt {
            order_id,
            total,
            items,
            purchase_json,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn on_quantity_change(
        &self,
        product_id: &str,
        action: QuantityAction,
    ) -> Result<QuantityChange> {
        let change = match action {
            QuantityAction::Increase => self.cart.increment(product_id)?,
            QuantityAction::Decrease => self.cart.decrement(product_id)?,
        };
        Ok(change)
    }
}
