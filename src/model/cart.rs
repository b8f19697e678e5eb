//! The cart session: a line-item store plus the draft submission state machine.
//!
//! All mutation rules live here as plain synchronous methods so they can be
//! unit-tested without an actor. The [`crate::cart_actor`] entity impl is a
//! thin dispatch layer over these methods.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart_actor::CartError;
use crate::model::MenuItem;

/// Delivery mode for an order, determining delivery-fee policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    RoomService,
    Restaurant,
    Takeaway,
}

/// Submission state of the current draft, observable by the UI.
///
/// `Validating` only exists inside the submission action; callers polling
/// state will normally see `Editing`, `Submitting`, `Confirmed` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftState {
    Editing,
    Validating,
    Submitting,
    Confirmed,
    Failed(String),
}

/// One cart entry: a menu-item snapshot with quantity and customizations.
///
/// Quantity is always >= 1; an entry that would reach quantity 0 is removed
/// from the cart instead of being stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub item: MenuItem,
    pub quantity: u32,
    pub customizations: Vec<String>,
    pub special_instructions: Option<String>,
}

impl LineItem {
    /// Unrounded price contribution of this line (`price * quantity`).
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// An in-progress guest cart.
///
/// Invariants:
/// - no two line items reference the same [`MenuItem`] id (quantity changes
///   mutate the existing entry);
/// - insertion order is preserved for display, though pricing ignores it;
/// - while a submission is in flight (`Submitting`), every mutation is
///   rejected with [`CartError::SubmissionInProgress`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSession {
    pub id: String,
    pub order_type: OrderType,
    pub delivery_address: Option<String>,
    pub special_instructions: Option<String>,
    items: Vec<LineItem>,
    state: DraftState,
    /// Generation counter for submission attempts. Completion reports must
    /// carry the attempt they belong to; a stale report (cancelled attempt,
    /// or an attempt superseded by a resubmission) never matches.
    attempt: u64,
}

/// Payload for opening a new cart session.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub order_type: OrderType,
}

impl CartSession {
    pub fn new(id: impl Into<String>, order_type: OrderType) -> Self {
        Self {
            id: id.into(),
            order_type,
            delivery_address: None,
            special_instructions: None,
            items: Vec::new(),
            state: DraftState::Editing,
            attempt: 0,
        }
    }

    /// Owned snapshot of the line items; mutating it does not touch the cart.
    pub fn items(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    /// Borrowed view for pricing.
    pub fn line_items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    /// Rejects mutations while a submission is in flight. Any permitted
    /// mutation on a `Confirmed`/`Failed` cart starts a fresh editing draft.
    fn ensure_editable(&mut self) -> Result<(), CartError> {
        match self.state {
            DraftState::Submitting => Err(CartError::SubmissionInProgress),
            _ => {
                self.state = DraftState::Editing;
                Ok(())
            }
        }
    }

    /// Upserts the line item for `item`.
    ///
    /// - quantity < 0 or > `u32::MAX`: [`CartError::InvalidQuantity`]
    /// - quantity == 0: removes the entry (no-op when absent)
    /// - quantity > 0: updates the existing entry in place (customizations
    ///   preserved) or appends a new one
    pub fn set_quantity(&mut self, item: MenuItem, quantity: i64) -> Result<(), CartError> {
        self.ensure_editable()?;
        if quantity < 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        if quantity == 0 {
            self.items.retain(|line| line.item.id != item.id);
            return Ok(());
        }
        let quantity = u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity(quantity))?;
        match self.items.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => line.quantity = quantity,
            None => self.items.push(LineItem {
                item,
                quantity,
                customizations: Vec::new(),
                special_instructions: None,
            }),
        }
        Ok(())
    }

    /// Removes the matching line item if present; no-op otherwise.
    pub fn remove(&mut self, menu_item_id: &str) -> Result<(), CartError> {
        self.ensure_editable()?;
        self.items.retain(|line| line.item.id != menu_item_id);
        Ok(())
    }

    /// Sets customizations and per-line instructions on an existing entry.
    /// No-op when the item is not in the cart.
    pub fn customize(
        &mut self,
        menu_item_id: &str,
        customizations: Vec<String>,
        special_instructions: Option<String>,
    ) -> Result<(), CartError> {
        self.ensure_editable()?;
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.item.id == menu_item_id)
        {
            line.customizations = customizations;
            line.special_instructions = special_instructions;
        }
        Ok(())
    }

    pub fn set_order_type(&mut self, order_type: OrderType) -> Result<(), CartError> {
        self.ensure_editable()?;
        self.order_type = order_type;
        Ok(())
    }

    pub fn set_delivery_address(&mut self, address: Option<String>) -> Result<(), CartError> {
        self.ensure_editable()?;
        self.delivery_address = address;
        Ok(())
    }

    pub fn set_instructions(&mut self, instructions: Option<String>) -> Result<(), CartError> {
        self.ensure_editable()?;
        self.special_instructions = instructions;
        Ok(())
    }

    // --- Submission state transitions (driven by the cart actor) ---

    /// `Editing/Failed -> Validating`. Fails when a submission is already in
    /// flight.
    pub fn begin_validation(&mut self) -> Result<(), CartError> {
        if self.state == DraftState::Submitting {
            return Err(CartError::SubmissionInProgress);
        }
        self.state = DraftState::Validating;
        Ok(())
    }

    /// `Validating -> Submitting` after the validator accepted the draft.
    /// Returns the token identifying this attempt; the matching completion
    /// report must present it.
    pub fn mark_submitting(&mut self) -> u64 {
        self.attempt += 1;
        self.state = DraftState::Submitting;
        self.attempt
    }

    /// Validation failed: the cart stays fully editable.
    pub fn mark_editing(&mut self) {
        self.state = DraftState::Editing;
    }

    /// `Submitting -> Confirmed`: the backend accepted the order, so the cart
    /// is cleared. Rejected with [`CartError::Cancelled`] when the attempt
    /// was cancelled in the meantime or superseded by a newer submission.
    pub fn confirm_submission(&mut self, attempt: u64) -> Result<(), CartError> {
        if self.state != DraftState::Submitting || attempt != self.attempt {
            return Err(CartError::Cancelled);
        }
        self.items.clear();
        self.delivery_address = None;
        self.special_instructions = None;
        self.state = DraftState::Confirmed;
        Ok(())
    }

    /// `Submitting -> Failed(reason)`: the cart keeps all line items.
    pub fn fail_submission(&mut self, attempt: u64, reason: String) -> Result<(), CartError> {
        if self.state != DraftState::Submitting || attempt != self.attempt {
            return Err(CartError::Cancelled);
        }
        self.state = DraftState::Failed(reason);
        Ok(())
    }

    /// Reverts a pending submission to `Editing`. Returns whether anything
    /// was cancelled.
    pub fn cancel_submission(&mut self) -> bool {
        if self.state == DraftState::Submitting {
            self.state = DraftState::Editing;
            true
        } else {
            false
        }
    }
}
