//! Error types for the menu actor.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::framework::ActorError;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// Menu item prices are non-negative.
    #[error("Negative price: {0}")]
    NegativePrice(Decimal),

    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    Session(String),
}

impl From<ActorError<MenuError>> for MenuError {
    fn from(e: ActorError<MenuError>) -> Self {
        match e {
            ActorError::Entity(err) => err,
            ActorError::NotFound(id) => MenuError::NotFound(id),
            other => MenuError::Session(other.to_string()),
        }
    }
}
