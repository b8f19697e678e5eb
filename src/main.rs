//! Demo binary: seeds a small menu, fills a room-service cart, and submits
//! it through the in-memory order backend.

use std::sync::Arc;

use guest_orders::backend::{InMemoryBackend, StaticIdentity};
use guest_orders::lifecycle::{setup_tracing, GuestOrderSystem};
use guest_orders::model::{DietaryFlags, FoodCategory, MenuItemCreate, OrderType};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting guest ordering system");

    let backend = Arc::new(InMemoryBackend::new());
    let identity = Arc::new(StaticIdentity::signed_in("guest_412"));
    let categories = vec![
        FoodCategory::new("mains", "Mains"),
        FoodCategory::new("desserts", "Desserts"),
    ];

    let system = GuestOrderSystem::new(backend, identity, categories);

    // Seed the catalog
    let burger_id = {
        let span = tracing::info_span!("catalog_seed");
        async {
            info!("Seeding menu");
            let burger = system
                .catalog_client
                .add_item(MenuItemCreate {
                    name: "Club Burger".to_string(),
                    price: Decimal::new(1500, 2),
                    category_id: "mains".to_string(),
                    available: true,
                    dietary: DietaryFlags::default(),
                    prep_minutes: 20,
                })
                .await
                .map_err(|e| e.to_string())?;
            system
                .catalog_client
                .add_item(MenuItemCreate {
                    name: "Tiramisu".to_string(),
                    price: Decimal::new(800, 2),
                    category_id: "desserts".to_string(),
                    available: true,
                    dietary: DietaryFlags {
                        vegetarian: true,
                        ..DietaryFlags::default()
                    },
                    prep_minutes: 5,
                })
                .await
                .map_err(|e| e.to_string())?;
            Ok::<_, String>(burger)
        }
        .instrument(span)
        .await?
    };

    let burger = system
        .catalog_client
        .menu_items(Some("mains"))
        .await
        .map_err(|e| e.to_string())?
        .into_iter()
        .find(|item| item.id == burger_id)
        .ok_or_else(|| "seeded item missing from catalog".to_string())?;

    // Build and submit a room-service cart
    let span = tracing::info_span!("order_flow");
    let result = async {
        let cart_id = system
            .cart_client
            .open_cart(OrderType::RoomService)
            .await?;
        system.cart_client.set_quantity(&cart_id, burger, 1).await?;
        system
            .cart_client
            .set_delivery_address(&cart_id, Some("Room 412".to_string()))
            .await?;

        let breakdown = system.cart_client.breakdown(&cart_id).await?;
        info!(
            subtotal = %breakdown.subtotal,
            delivery_fee = %breakdown.delivery_fee,
            tax = %breakdown.tax,
            total = %breakdown.total,
            "Cart priced"
        );

        system.cart_client.submit(&cart_id).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(order) => info!(
            order_number = %order.order_number,
            total = %order.total,
            "Order placed successfully"
        ),
        Err(e) => error!(error = %e, "Order submission failed"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
