//! Custom actions for the cart actor.
//!
//! The cart lives almost entirely in its action vocabulary: line-item edits,
//! read-only snapshots, and the submission handshake driven by
//! [`CartClient::submit`](crate::clients::CartClient::submit).

use crate::model::{
    ActorId, DraftState, LineItem, MenuItem, Order, OrderDraft, OrderType,
};
use crate::pricing::PriceBreakdown;

/// Operations on a cart session.
///
/// The three submission completions (`CompleteSubmission`, `FailSubmission`,
/// `CancelSubmission`) are only meaningful while the draft is `Submitting`;
/// stale completions after a cancel are rejected by the entity.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Upsert the line item for a menu item. Quantity 0 removes it.
    SetQuantity { item: MenuItem, quantity: i64 },
    /// Remove a line item; no-op when absent.
    RemoveItem { menu_item_id: String },
    /// Set customizations and per-line instructions on an existing line item.
    Customize {
        menu_item_id: String,
        customizations: Vec<String>,
        special_instructions: Option<String>,
    },
    SetOrderType(OrderType),
    SetDeliveryAddress(Option<String>),
    SetInstructions(Option<String>),
    /// Read-only snapshot of the line items.
    Items,
    /// Recompute the price breakdown from the current cart.
    Breakdown,
    /// Current draft state for the UI.
    State,
    /// Validate the cart and, on success, move the draft to `Submitting`.
    BeginSubmission { actor: Option<ActorId> },
    /// The backend accepted the order: clear the cart, confirm the draft.
    /// `attempt` is the token returned by `BeginSubmission`.
    CompleteSubmission { order: Order, attempt: u64 },
    /// The backend rejected the order: keep the cart, record the reason.
    FailSubmission { reason: String, attempt: u64 },
    /// Revert a pending submission to `Editing`.
    CancelSubmission,
}

/// Results from cart actions - variants match the actions that produce them.
#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// The mutation was applied.
    Done,
    Items(Vec<LineItem>),
    Breakdown(PriceBreakdown),
    State(DraftState),
    /// Result of `BeginSubmission`: the normalized draft for the backend,
    /// plus the token its completion report must carry.
    Draft { draft: OrderDraft, attempt: u64 },
    /// Result of `CompleteSubmission`: the confirmed order.
    Completed(Order),
    /// Result of `CancelSubmission`: whether a pending submission existed.
    Cancelled(bool),
}
