//! Cart-specific resource logic and entity implementation.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::backend::{IdentityProvider, OrderBackend};
use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::CartSession;

/// Creates a new cart actor and its client.
///
/// The client carries the order backend and identity collaborators; the
/// actor itself only needs the pricing configuration, injected via
/// `run(config)`.
pub fn new(
    backend: Arc<dyn OrderBackend>,
    identity: Arc<dyn IdentityProvider>,
) -> (ResourceActor<CartSession>, CartClient) {
    let cart_id_counter = Arc::new(AtomicU64::new(1));
    let next_cart_id = move || {
        let id = cart_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("cart_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_cart_id);
    let client = CartClient::new(generic_client, backend, identity);

    (actor, client)
}
