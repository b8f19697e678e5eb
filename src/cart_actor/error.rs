//! Error types for the cart actor.

use thiserror::Error;

use crate::framework::ActorError;

/// Errors that can occur while editing or submitting a cart.
///
/// Every variant is recoverable: the cart stays intact and editable after
/// any of these, and a failed submission may be retried with a new attempt.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// A negative quantity was requested.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Submission was attempted on a cart with no line items.
    #[error("Cart is empty")]
    EmptyCart,

    /// Room-service orders require a delivery address.
    #[error("Delivery address is required for room service")]
    MissingDeliveryAddress,

    /// No guest identity is available for this session.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// A submission for this cart is already in flight.
    #[error("Submission already in progress")]
    SubmissionInProgress,

    /// The pending submission was cancelled before the backend completed.
    #[error("Submission cancelled")]
    Cancelled,

    /// The order backend reported a failure; the reason is surfaced verbatim.
    #[error("Order backend error: {0}")]
    Remote(String),

    /// The requested cart session does not exist.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    Session(String),
}

impl From<ActorError<CartError>> for CartError {
    fn from(e: ActorError<CartError>) -> Self {
        match e {
            ActorError::Entity(err) => err,
            ActorError::NotFound(id) => CartError::NotFound(id),
            other => CartError::Session(other.to_string()),
        }
    }
}
