//! Collaborator boundaries: the remote order backend and the identity
//! provider.
//!
//! The engine only ever talks to these through trait objects, so tests can
//! script failures and pending calls, and the application shell can plug in
//! whatever transport it owns. The in-memory implementations here back the
//! demo binary and the integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;

use crate::model::{ActorId, Order, OrderDraft, OrderStatus, PaymentStatus};

/// Failures reported by the order backend.
///
/// The submission coordinator performs no retries and treats a timeout the
/// same as any other remote failure: the reason is surfaced verbatim to the
/// caller as [`CartError::Remote`](crate::cart_actor::CartError::Remote).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BackendError {
    /// The backend refused the order (e.g. kitchen closed).
    #[error("Order rejected: {0}")]
    Rejected(String),

    /// The backend reported a timeout. Timeout policy belongs to the
    /// backend, not this engine.
    #[error("Order backend timed out")]
    Timeout,

    /// The backend could not be reached.
    #[error("Order backend unavailable: {0}")]
    Unavailable(String),
}

/// The order-creation collaborator: the only network-shaped dependency of
/// the submission coordinator.
#[async_trait]
pub trait OrderBackend: Send + Sync {
    /// Creates an order from a validated draft. The returned [`Order`] is
    /// immutable; all later status transitions belong to the backend.
    async fn create_order(&self, draft: OrderDraft) -> Result<Order, BackendError>;
}

/// The identity collaborator consumed by the order validator.
pub trait IdentityProvider: Send + Sync {
    fn current_actor(&self) -> Option<ActorId>;
}

/// Fixed identity for the demo binary and tests.
pub struct StaticIdentity(Option<ActorId>);

impl StaticIdentity {
    pub fn signed_in(actor: impl Into<String>) -> Self {
        Self(Some(ActorId::new(actor)))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_actor(&self) -> Option<ActorId> {
        self.0.clone()
    }
}

/// In-memory order backend: accepts every draft and assigns sequential
/// order numbers. Stands in for the real order-management service.
pub struct InMemoryBackend {
    next_order: AtomicU64,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            next_order: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderBackend for InMemoryBackend {
    async fn create_order(&self, draft: OrderDraft) -> Result<Order, BackendError> {
        let n = self.next_order.fetch_add(1, Ordering::SeqCst);
        Ok(Order {
            id: format!("order_{}", n),
            order_number: format!("ORD-{:04}", 1000 + n),
            placed_by: draft.placed_by,
            items: draft.items,
            order_type: draft.order_type,
            delivery_address: draft.delivery_address,
            total: draft.totals.total,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderType;
    use crate::pricing::PriceBreakdown;

    #[tokio::test]
    async fn in_memory_backend_assigns_sequential_order_numbers() {
        let backend = InMemoryBackend::new();
        let draft = OrderDraft {
            cart_id: "cart_1".into(),
            placed_by: ActorId::new("guest_1"),
            items: Vec::new(),
            order_type: OrderType::Takeaway,
            delivery_address: None,
            special_instructions: None,
            totals: PriceBreakdown::zero(),
        };

        let first = backend.create_order(draft.clone()).await.unwrap();
        let second = backend.create_order(draft).await.unwrap();

        assert_eq!(first.order_number, "ORD-1001");
        assert_eq!(second.order_number, "ORD-1002");
        assert_eq!(first.status, OrderStatus::Pending);
        assert_eq!(first.payment_status, PaymentStatus::Pending);
    }
}
