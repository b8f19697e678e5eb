//! ActorEntity trait implementation for the MenuItem domain type.
//!
//! The catalog is plain CRUD plus `List`; menu items have no custom actions.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::error::MenuError;
use crate::framework::ActorEntity;
use crate::model::{MenuItem, MenuItemCreate, MenuItemUpdate};

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = String;
    type CreateParams = MenuItemCreate;
    type UpdateParams = MenuItemUpdate;
    type Action = ();
    type ActionResult = ();
    type Error = MenuError;
    type Context = ();

    fn from_create_params(id: String, params: MenuItemCreate) -> Result<Self, MenuError> {
        if params.price < Decimal::ZERO {
            return Err(MenuError::NegativePrice(params.price));
        }
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            category_id: params.category_id,
            available: params.available,
            dietary: params.dietary,
            prep_minutes: params.prep_minutes,
        })
    }

    /// Applies a partial update.
    ///
    /// # Fields Updated
    /// - `price`: unit price (still non-negative)
    /// - `available`: availability flag
    /// - `prep_minutes`: preparation time
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        if let Some(price) = update.price {
            if price < Decimal::ZERO {
                return Err(MenuError::NegativePrice(price));
            }
            self.price = price;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        if let Some(prep_minutes) = update.prep_minutes {
            self.prep_minutes = prep_minutes;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), MenuError> {
        Ok(())
    }
}
