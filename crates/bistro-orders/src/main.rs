//! # Bistro Orders demo
//!
//! Walks through one customer session:
//! 1. Loading the [`ShopConfig`] and starting the [`BistroSystem`].
//! 2. Filling a cart from the menu and adjusting it.
//! 3. A rejected checkout, then a successful one through the order API.
//! 4. Moving the order through the kitchen and shutting down.

use bistro_ledger::catalog::{Catalog, CategoryFilter};
use bistro_ledger::ledger;
use bistro_ledger::model::{Cart, MenuItemId};
use bistro_orders::checkout::place_order;
use bistro_orders::config::ShopConfig;
use bistro_orders::lifecycle::{setup_tracing, BistroSystem};
use bistro_orders::model::{OrderId, OrderStatus};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ShopConfig::from_env().map_err(|e| e.to_string())?;
    info!(minimum = %config.minimum_order_value, "Starting bistro");

    let system = BistroSystem::new(config, Catalog::house_menu());
    let minimum = system.minimum_order_value();
    info!(eta = %system.config().estimated_time, "Kitchen open");

    for category in system.catalog.categories() {
        let names: Vec<&str> = system
            .catalog
            .filter_by_category(&CategoryFilter::parse(category))
            .into_iter()
            .map(|item| item.name.as_str())
            .collect();
        info!(category, items = ?names, "Menu section");
    }

    let mut cart = Cart::new();

    let span = tracing::info_span!("browsing");
    async {
        for id in [1, 1, 4, 5, 42] {
            if let Err(e) = ledger::add_item(&system.catalog, &mut cart, MenuItemId(id)) {
                warn!(error = %e, "Could not add item");
            }
        }
        if let Err(e) = ledger::update_quantity(&mut cart, MenuItemId(4), -1) {
            warn!(error = %e, "Could not update quantity");
        }
        info!(
            lines = cart.len(),
            units = cart.item_count(),
            total = %ledger::compute_total(&cart),
            with_coupon = %ledger::apply_discount(ledger::compute_total(&cart), 10.0),
            "Cart ready"
        );
    }
    .instrument(span)
    .await;

    let submitter = system.api_submitter();

    // A customer who has not picked anything yet.
    if let Err(e) = place_order(&Cart::new(), minimum, &submitter).await {
        warn!(error = %e, "Checkout refused");
    }

    let span = tracing::info_span!("checkout");
    let receipt = place_order(&cart, minimum, &submitter).instrument(span).await;

    match receipt {
        Ok(receipt) => {
            info!(order_id = %receipt.order_id, eta = %receipt.estimated_time, "Order confirmed");

            let id: OrderId = receipt.order_id.parse()?;
            for status in [OrderStatus::Processing, OrderStatus::Shipped] {
                match system.desk_client.advance(id, status).await {
                    Ok(order) => info!(order_id = %order.order_id, status = %order.status, "Kitchen update"),
                    Err(e) => error!(error = %e, "Kitchen update failed"),
                }
            }
        }
        Err(e) => error!(error = %e, "Order failed"),
    }

    drop(submitter);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
