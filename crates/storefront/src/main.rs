//! Demo entry point: runs a scripted shopping session and prints the event log.

use analytics::TracingSink;
use storefront::{Config, QuantityAction, StorefrontHandler, StorefrontSession};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    // 3. Build the session on the process-wide cart and event log
    let print_metrics = config.print_metrics;
    let session = StorefrontSession::with_global_state(config, TracingSink);
    tracing::info!("starting storefront demo session");

    // 4. Shop
    let products = session.on_view_item_list().await?;
    let [first, second, ..] = products.as_slice() else {
        return Err("demo catalog needs at least two products".into());
    };
    let first = first.id().to_string();
    let second = second.id().to_string();

    session.on_view_item(&first).await?;
    session.on_add_to_cart(&first).await?;
    session.on_add_to_cart(&first).await?;

    session.on_view_item(&second).await?;
    session.on_add_to_cart(&second).await?;

    let view = session.on_view_cart().await?;
    println!("Cart total: {}", view.total);

    session
        .on_quantity_change(&second, QuantityAction::Increase)
        .await?;
    session
        .on_quantity_change(&first, QuantityAction::Decrease)
        .await?;
    println!("Cart total: {}", session.cart_total());

    // 5. Checkout
    let receipt = session.on_checkout().await?;
    println!("Order ID: {}", receipt.order_id);
    println!("Total: {}", receipt.total);

    // 6. Event log, most recent first
    println!();
    print!("{}", session.recorder().log().joined());

    if print_metrics {
        println!();
        print!("{}", metrics_handle.render());
    }

    tracing::info!("storefront demo session finished");
    Ok(())
}
