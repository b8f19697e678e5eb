use std::sync::Arc;

use tracing::{error, info};

use crate::backend::{IdentityProvider, OrderBackend};
use crate::clients::{CartClient, CatalogClient};
use crate::model::FoodCategory;
use crate::pricing::PricingConfig;

/// The runtime orchestrator for the guest ordering system.
///
/// `GuestOrderSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping all actors
/// - **Dependency Wiring**: handing the cart client its backend and identity
///   collaborators, and the cart actor its pricing configuration
///
/// # Architecture
///
/// Two actors run here:
/// - **Menu actor**: manages the catalog (CRUD + listing)
/// - **Cart actor**: manages cart sessions, pricing reads, and the draft
///   submission state machine
///
/// The order backend and identity provider are collaborators passed in by
/// the application shell, not actors of this system.
///
/// # Example
///
/// ```ignore
/// let system = GuestOrderSystem::new(backend, identity, categories);
///
/// let item_id = system.catalog_client.add_item(params).await?;
/// let cart_id = system.cart_client.open_cart(OrderType::RoomService).await?;
/// system.cart_client.set_quantity(&cart_id, item, 2).await?;
/// let order = system.cart_client.submit(&cart_id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct GuestOrderSystem {
    /// Client for the menu/catalog actor
    pub catalog_client: CatalogClient,

    /// Client for the cart actor (includes the submission coordinator)
    pub cart_client: CartClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl GuestOrderSystem {
    /// Creates the system with default pricing (10% tax, 5.00 room-service
    /// delivery fee).
    pub fn new(
        backend: Arc<dyn OrderBackend>,
        identity: Arc<dyn IdentityProvider>,
        categories: Vec<FoodCategory>,
    ) -> Self {
        Self::with_pricing(backend, identity, categories, PricingConfig::default())
    }

    /// Creates the system with an explicit pricing policy.
    ///
    /// This method:
    /// 1. Creates the menu and cart actors with their ID generators
    /// 2. Wires collaborators into the cart client
    /// 3. Spawns each actor in its own Tokio task, injecting the pricing
    ///    configuration as the cart actor's context
    pub fn with_pricing(
        backend: Arc<dyn OrderBackend>,
        identity: Arc<dyn IdentityProvider>,
        categories: Vec<FoodCategory>,
        pricing: PricingConfig,
    ) -> Self {
        let (menu_actor, catalog_client) = crate::menu_actor::new(categories);
        let (cart_actor, cart_client) = crate::cart_actor::new(backend, identity);

        let menu_handle = tokio::spawn(menu_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(pricing));

        Self {
            catalog_client,
            cart_client,
            handles: vec![menu_handle, cart_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each actor detects the
    /// closed channel and exits its event loop. Any panicked actor task is
    /// reported as an error.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.catalog_client);
        drop(self.cart_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
