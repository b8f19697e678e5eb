//! # Core Actor Framework
//!
//! Generic building blocks for the actor system.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all resource types must implement.
//! - [`ResourceActor`]: The generic actor that manages entities.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`ActorError`]: Transport errors plus the entity's own error type.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

/// Trait that any resource entity must implement to be managed by [`ResourceActor`].
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that all our resource types (menu
/// items, cart sessions) must satisfy, we write the message-processing loop
/// *once* and reuse it for every resource.
///
/// Associated types enforce type safety: a cart actor cannot receive a
/// menu-item payload, and each entity reports failures with its own error
/// enum rather than a stringly-typed catch-all. The error type flows through
/// [`ActorError::Entity`] so clients can pattern-match on domain failures.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks may await other actors or services.
/// `Context` is injected into every hook at `run()` time ("late binding"),
/// which is how the cart actor receives its pricing configuration.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, Uuid, u64).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO).
    type CreateParams: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type UpdateParams: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `SetQuantity`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The entity's own error type, surfaced to clients unmodified.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Construct the full entity from the ID and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    // --- Lifecycle hooks ---

    /// Called immediately after the entity is created and initialized.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::UpdateParams,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action handler ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors crossing the actor boundary: either the channel plumbing failed,
/// the entity was missing, or the entity itself rejected the operation.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ActorError<E> {
    #[error("Actor closed")]
    Closed,
    #[error("Actor dropped response channel")]
    Dropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Entity(E),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T, E> = oneshot::Sender<Result<T, ActorError<E>>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Design
/// Each actor manages one kind of resource, and the operations standardize
/// around a resource lifecycle: Create, Get, List, Update, Delete, plus an
/// `Action` escape hatch for domain operations that do not fit CRUD (the cart
/// actor lives almost entirely in `Action`).
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<(), T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// # Concurrency Model
/// Each `ResourceActor` processes its own messages *sequentially* in a loop,
/// so the `store` needs no `Mutex`. Exclusive ownership of state within the
/// task is what lets the cart enforce its single-in-flight submission rule
/// without any locking.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows
    /// entities to access dependencies that were created *after* the actor was
    /// instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "CartSession" instead of the full path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(ActorError::Entity(e)));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(ActorError::Entity(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(ActorError::Entity(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(ActorError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(ActorError::Entity(e)));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(ActorError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(ActorError::Entity);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(ActorError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, ActorError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, ActorError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, ActorError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)?
    }

    pub async fn update(
        &self,
        id: T::Id,
        update: T::UpdateParams,
    ) -> Result<T, ActorError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), ActorError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, ActorError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)?
    }
}

// =============================================================================
// EXAMPLE USAGE (Test)
// =============================================================================
