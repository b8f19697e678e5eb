//! Generic actor framework for resource management.
//!
//! This module provides the core building blocks for creating type-safe actor
//! systems that manage resource entities with CRUD operations and custom
//! actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that manages entities
//! - [`ResourceClient`] - Type-safe handle for talking to a running actor
//! - [`ActorError`] - Transport errors wrapping each entity's own error type
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

pub use core::*;
