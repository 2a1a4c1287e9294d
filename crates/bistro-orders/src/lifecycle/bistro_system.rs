use crate::api::OrderApi;
use crate::clients::OrderDeskClient;
use crate::config::ShopConfig;
use crate::desk_actor;
use crate::submission::{ApiSubmitter, DeskSubmitter};
use bistro_ledger::catalog::Catalog;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the ordering flow.
///
/// `BistroSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the order desk task
/// - **Dependency Wiring**: Handing the desk client and catalog to the API
/// - **Configuration**: Applying [`ShopConfig`] (buffer size, deal of the day,
///   pickup estimate, API key)
///
/// # Example
///
/// ```ignore
/// let system = BistroSystem::new(ShopConfig::default(), Catalog::house_menu());
///
/// let submitter = system.api_submitter();
/// let receipt = checkout::place_order(&cart, system.minimum_order_value(), &submitter).await?;
///
/// drop(submitter);
/// system.shutdown().await?;
/// ```
pub struct BistroSystem {
    /// Client for the order desk
    pub desk_client: OrderDeskClient,

    /// Routed order API backed by the desk
    pub api: OrderApi,

    /// The menu, with the configured deal of the day attached
    pub catalog: Arc<Catalog>,

    config: ShopConfig,

    handle: tokio::task::JoinHandle<()>,
}

impl BistroSystem {
    /// Spawns the order desk and wires the API to it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: ShopConfig, catalog: Catalog) -> Self {
        let catalog = match &config.deal_of_the_day {
            Some(deal) => catalog.with_deal(deal.clone()),
            None => catalog,
        };
        let catalog = Arc::new(catalog);

        let (desk, desk_client) = desk_actor::new(config.desk_buffer);
        let handle = tokio::spawn(desk.run());

        let api = OrderApi::new(
            catalog.clone(),
            desk_client.clone(),
            config.estimated_time.clone(),
        );

        info!(menu_items = catalog.len(), "Bistro system started");
        Self {
            desk_client,
            api,
            catalog,
            config,
            handle,
        }
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn minimum_order_value(&self) -> rust_decimal::Decimal {
        self.config.minimum_order_value
    }

    /// A submitter that goes through the JSON API, sending the configured key.
    pub fn api_submitter(&self) -> ApiSubmitter {
        let submitter = ApiSubmitter::new(self.api.clone());
        match &self.config.api_key {
            Some(key) => submitter.with_api_key(key.clone()),
            None => submitter,
        }
    }

    /// A submitter that talks to the desk directly.
    pub fn desk_submitter(&self) -> DeskSubmitter {
        DeskSubmitter::new(self.desk_client.clone(), self.config.estimated_time.clone())
    }

    /// Stops the desk and waits for it to finish.
    ///
    /// The desk exits once every [`OrderDeskClient`] is gone, including the
    /// ones inside submitters handed out by this system; drop those first or
    /// this call waits for them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the desk shut down cleanly
    /// - `Err(String)` if the desk task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down bistro system...");

        drop(self.api);
        drop(self.desk_client);

        if let Err(e) = self.handle.await {
            error!("Order desk task failed: {:?}", e);
            return Err(format!("Order desk task failed: {:?}", e));
        }

        info!("Bistro system shutdown complete.");
        Ok(())
    }
}
