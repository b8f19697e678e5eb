//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`GuestOrderSystem`] - The orchestrator that wires actors and collaborators
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod guest_order_system;
pub mod tracing;

pub use guest_order_system::*;
pub use tracing::*;
