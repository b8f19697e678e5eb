//! Order records: the normalized draft sent to the backend and the immutable
//! order the backend returns.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::model::{LineItem, OrderType};
use crate::pricing::PriceBreakdown;

/// Identity of the guest placing the order, supplied by the identity
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized, validated snapshot of a cart, ready for the order backend.
///
/// Produced only by the validator: quantities are integers >= 1, blank
/// special instructions are absent, and the delivery address is present
/// exactly when the order type requires one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub cart_id: String,
    pub placed_by: ActorId,
    pub items: Vec<LineItem>,
    pub order_type: OrderType,
    pub delivery_address: Option<String>,
    pub special_instructions: Option<String>,
    pub totals: PriceBreakdown,
}

/// Kitchen-side status of a submitted order. Transitions are owned by the
/// order backend, never by this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

/// Payment status of a submitted order, owned by the order backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

/// Immutable record returned by the order backend on successful creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub placed_by: ActorId,
    pub items: Vec<LineItem>,
    pub order_type: OrderType,
    pub delivery_address: Option<String>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}
