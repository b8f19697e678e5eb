//! Client for the cart actor, including the order submission coordinator.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::backend::{IdentityProvider, OrderBackend};
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::model::{CartSession, DraftState, LineItem, MenuItem, Order, OrderType};
use crate::pricing::PriceBreakdown;

/// Client for interacting with the cart actor.
///
/// Line-item edits and reads are one action round-trip each. `submit` is the
/// submission coordinator: it drives the validation handshake inside the
/// actor, awaits the order backend in the *caller's* task, and reports the
/// completion back to the actor. The actor loop is never blocked on the
/// network, so `items`/`breakdown`/`state` stay responsive while an order is
/// in flight.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartSession>,
    backend: Arc<dyn OrderBackend>,
    identity: Arc<dyn IdentityProvider>,
}

impl CartClient {
    pub fn new(
        inner: ResourceClient<CartSession>,
        backend: Arc<dyn OrderBackend>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            inner,
            backend,
            identity,
        }
    }

    async fn perform(&self, cart_id: &str, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(cart_id.to_string(), action)
            .await
            .map_err(CartError::from)
    }

    /// Opens a new cart session and returns its id.
    #[instrument(skip(self))]
    pub async fn open_cart(&self, order_type: OrderType) -> Result<String, CartError> {
        debug!("Sending request");
        self.inner
            .create(crate::model::CartCreate { order_type })
            .await
            .map_err(CartError::from)
    }

    /// Upserts the line item for `item`; quantity 0 removes it.
    #[instrument(skip(self, item), fields(menu_item_id = %item.id))]
    pub async fn set_quantity(
        &self,
        cart_id: &str,
        item: MenuItem,
        quantity: i64,
    ) -> Result<(), CartError> {
        debug!("Sending request");
        match self
            .perform(cart_id, CartAction::SetQuantity { item, quantity })
            .await?
        {
            CartActionResult::Done => Ok(()),
            other => Err(unexpected("SetQuantity", other)),
        }
    }

    /// Removes a line item; no-op when absent.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, cart_id: &str, menu_item_id: &str) -> Result<(), CartError> {
        debug!("Sending request");
        match self
            .perform(
                cart_id,
                CartAction::RemoveItem {
                    menu_item_id: menu_item_id.to_string(),
                },
            )
            .await?
        {
            CartActionResult::Done => Ok(()),
            other => Err(unexpected("RemoveItem", other)),
        }
    }

    /// Sets customizations and per-line instructions on an existing entry.
    #[instrument(skip(self, customizations, special_instructions))]
    pub async fn customize(
        &self,
        cart_id: &str,
        menu_item_id: &str,
        customizations: Vec<String>,
        special_instructions: Option<String>,
    ) -> Result<(), CartError> {
        debug!("Sending request");
        match self
            .perform(
                cart_id,
                CartAction::Customize {
                    menu_item_id: menu_item_id.to_string(),
                    customizations,
                    special_instructions,
                },
            )
            .await?
        {
            CartActionResult::Done => Ok(()),
            other => Err(unexpected("Customize", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_order_type(
        &self,
        cart_id: &str,
        order_type: OrderType,
    ) -> Result<(), CartError> {
        debug!("Sending request");
        match self
            .perform(cart_id, CartAction::SetOrderType(order_type))
            .await?
        {
            CartActionResult::Done => Ok(()),
            other => Err(unexpected("SetOrderType", other)),
        }
    }

    #[instrument(skip(self, address))]
    pub async fn set_delivery_address(
        &self,
        cart_id: &str,
        address: Option<String>,
    ) -> Result<(), CartError> {
        debug!("Sending request");
        match self
            .perform(cart_id, CartAction::SetDeliveryAddress(address))
            .await?
        {
            CartActionResult::Done => Ok(()),
            other => Err(unexpected("SetDeliveryAddress", other)),
        }
    }

    #[instrument(skip(self, instructions))]
    pub async fn set_instructions(
        &self,
        cart_id: &str,
        instructions: Option<String>,
    ) -> Result<(), CartError> {
        debug!("Sending request");
        match self
            .perform(cart_id, CartAction::SetInstructions(instructions))
            .await?
        {
            CartActionResult::Done => Ok(()),
            other => Err(unexpected("SetInstructions", other)),
        }
    }

    /// Read-only snapshot of the cart's line items.
    #[instrument(skip(self))]
    pub async fn items(&self, cart_id: &str) -> Result<Vec<LineItem>, CartError> {
        debug!("Sending request");
        match self.perform(cart_id, CartAction::Items).await? {
            CartActionResult::Items(items) => Ok(items),
            other => Err(unexpected("Items", other)),
        }
    }

    /// Recomputes the price breakdown for the current cart.
    #[instrument(skip(self))]
    pub async fn breakdown(&self, cart_id: &str) -> Result<PriceBreakdown, CartError> {
        debug!("Sending request");
        match self.perform(cart_id, CartAction::Breakdown).await? {
            CartActionResult::Breakdown(breakdown) => Ok(breakdown),
            other => Err(unexpected("Breakdown", other)),
        }
    }

    /// Current draft state, for the UI.
    #[instrument(skip(self))]
    pub async fn state(&self, cart_id: &str) -> Result<DraftState, CartError> {
        debug!("Sending request");
        match self.perform(cart_id, CartAction::State).await? {
            CartActionResult::State(state) => Ok(state),
            other => Err(unexpected("State", other)),
        }
    }

    /// Submits the cart as an order.
    ///
    /// Sequence: validate inside the actor (which moves the draft to
    /// `Submitting` and rejects concurrent submissions), call the order
    /// backend, then report the outcome back to the actor. The cart is
    /// cleared only after the backend confirms creation; on failure it keeps
    /// every line item and records `Failed(reason)`. Each attempt carries the
    /// token minted by `BeginSubmission`: if the submission was cancelled (or
    /// superseded by a resubmission) while the backend call was pending, its
    /// stale completion no longer matches, is discarded, and this returns
    /// [`CartError::Cancelled`].
    #[instrument(skip(self))]
    pub async fn submit(&self, cart_id: &str) -> Result<Order, CartError> {
        let actor = self.identity.current_actor();
        let (draft, attempt) = match self
            .perform(cart_id, CartAction::BeginSubmission { actor })
            .await?
        {
            CartActionResult::Draft { draft, attempt } => (draft, attempt),
            other => return Err(unexpected("BeginSubmission", other)),
        };

        info!(total = %draft.totals.total, "Submitting order draft to backend");
        match self.backend.create_order(draft).await {
            Ok(order) => match self
                .perform(
                    cart_id,
                    CartAction::CompleteSubmission {
                        order: order.clone(),
                        attempt,
                    },
                )
                .await
            {
                Ok(CartActionResult::Completed(order)) => {
                    info!(order_number = %order.order_number, "Order confirmed");
                    Ok(order)
                }
                Ok(other) => Err(unexpected("CompleteSubmission", other)),
                // Cancelled while the backend call was pending: the order
                // record is discarded and the cart was left untouched.
                Err(e) => Err(e),
            },
            Err(backend_err) => {
                let reason = backend_err.to_string();
                warn!(error = %reason, "Order backend failed");
                match self
                    .perform(
                        cart_id,
                        CartAction::FailSubmission {
                            reason: reason.clone(),
                            attempt,
                        },
                    )
                    .await
                {
                    Err(CartError::Cancelled) => Err(CartError::Cancelled),
                    _ => Err(CartError::Remote(reason)),
                }
            }
        }
    }

    /// Cancels a pending submission, reverting the draft to `Editing`.
    /// Returns whether a submission was actually in flight.
    #[instrument(skip(self))]
    pub async fn cancel(&self, cart_id: &str) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.perform(cart_id, CartAction::CancelSubmission).await? {
            CartActionResult::Cancelled(was_pending) => Ok(was_pending),
            other => Err(unexpected("CancelSubmission", other)),
        }
    }
}

fn unexpected(action: &str, result: CartActionResult) -> CartError {
    CartError::Session(format!("unexpected {} response: {:?}", action, result))
}

#[async_trait]
impl ActorClient<CartSession> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartSession> {
        &self.inner
    }
}
