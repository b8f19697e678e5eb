//! ActorEntity trait implementation for the cart session.
//!
//! The entity is a thin dispatch layer: mutation rules live on
//! [`CartSession`] itself and validation in [`crate::checkout`], so both are
//! unit-testable without an actor. The pricing configuration arrives through
//! the actor context.

use async_trait::async_trait;

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::checkout;
use crate::framework::ActorEntity;
use crate::model::{CartCreate, CartSession};
use crate::pricing::{price_breakdown, PricingConfig};

#[async_trait]
impl ActorEntity for CartSession {
    type Id = String;
    type CreateParams = CartCreate;
    type UpdateParams = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Error = CartError;
    type Context = PricingConfig;

    fn from_create_params(id: Self::Id, params: CartCreate) -> Result<Self, CartError> {
        Ok(CartSession::new(id, params.order_type))
    }

    async fn on_update(&mut self, _update: (), _ctx: &PricingConfig) -> Result<(), CartError> {
        Ok(())
    }

    /// Dispatches cart actions.
    ///
    /// `BeginSubmission` runs the draft state machine: `Editing ->
    /// Validating`, then either `-> Submitting` with the normalized draft as
    /// result, or back to `Editing` with the validation error. The remote
    /// call itself happens outside the actor loop, so reads remain available
    /// while an order is in flight.
    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &PricingConfig,
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::SetQuantity { item, quantity } => {
                self.set_quantity(item, quantity)?;
                Ok(CartActionResult::Done)
            }
            CartAction::RemoveItem { menu_item_id } => {
                self.remove(&menu_item_id)?;
                Ok(CartActionResult::Done)
            }
            CartAction::Customize {
                menu_item_id,
                customizations,
                special_instructions,
            } => {
                self.customize(&menu_item_id, customizations, special_instructions)?;
                Ok(CartActionResult::Done)
            }
            CartAction::SetOrderType(order_type) => {
                self.set_order_type(order_type)?;
                Ok(CartActionResult::Done)
            }
            CartAction::SetDeliveryAddress(address) => {
                self.set_delivery_address(address)?;
                Ok(CartActionResult::Done)
            }
            CartAction::SetInstructions(instructions) => {
                self.set_instructions(instructions)?;
                Ok(CartActionResult::Done)
            }
            CartAction::Items => Ok(CartActionResult::Items(self.items())),
            CartAction::Breakdown => Ok(CartActionResult::Breakdown(price_breakdown(
                self.line_items(),
                self.order_type,
                ctx,
            ))),
            CartAction::State => Ok(CartActionResult::State(self.state().clone())),
            CartAction::BeginSubmission { actor } => {
                self.begin_validation()?;
                match checkout::validate(self, actor, ctx) {
                    Ok(draft) => {
                        let attempt = self.mark_submitting();
                        Ok(CartActionResult::Draft { draft, attempt })
                    }
                    Err(e) => {
                        self.mark_editing();
                        Err(e)
                    }
                }
            }
            CartAction::CompleteSubmission { order, attempt } => {
                self.confirm_submission(attempt)?;
                Ok(CartActionResult::Completed(order))
            }
            CartAction::FailSubmission { reason, attempt } => {
                self.fail_submission(attempt, reason)?;
                Ok(CartActionResult::Done)
            }
            CartAction::CancelSubmission => {
                Ok(CartActionResult::Cancelled(self.cancel_submission()))
            }
        }
    }
}
