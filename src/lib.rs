#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Guest Orders
//!
//! > **A cart pricing and order validation engine for guest services, built
//! > on resource-oriented actors.**
//!
//! This crate implements the ordering core of a hotel guest-services
//! application: a line-item store, a decimal-safe pricing calculator, an
//! order validator, and an order submission coordinator. Rendering, routing,
//! and the real order backend are external collaborators reached through
//! trait boundaries.
//!
//! ## 🏗️ Design Philosophy
//!
//! Each cart session is isolated state behind an actor: one Tokio task
//! processes its messages sequentially, so the engine enforces its
//! invariants (one line item per menu item, no mutations while a submission
//! is in flight) without any locking. The generic [`framework`] writes that
//! message loop once; carts and menu items plug into it as
//! [`ActorEntity`](framework::ActorEntity) implementations with typed,
//! per-resource error enums.
//!
//! Money is `rust_decimal::Decimal` throughout, with every derived amount
//! rounded half-up to 2 decimals before it is summed, so
//! `total == subtotal + delivery_fee + tax` holds exactly.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that powers everything.
//! - **Role**: separates business logic (your entity) from plumbing
//!   (channels, message loops, error transport).
//! - **Key items**: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceActor`](framework::ResourceActor).
//!
//! ### 2. The Domain ([`model`], [`pricing`], [`checkout`])
//! Pure data and pure functions, unit-testable without an actor.
//! - [`model::CartSession`] owns the line-item rules and the draft state
//!   machine; [`pricing::price_breakdown`] derives totals;
//!   [`checkout::validate`] gates submission and normalizes the draft.
//!
//! ### 3. The Implementation ([`cart_actor`], [`menu_actor`])
//! Concrete [`ActorEntity`](framework::ActorEntity) implementations plus
//! their action and error vocabularies.
//!
//! ### 4. The Interface ([`clients`])
//! Type-safe wrappers hiding raw message passing.
//! - [`CartClient`](clients::CartClient) is also the submission
//!   coordinator: it awaits the order backend in the caller's task so cart
//!   reads stay available while an order is in flight.
//!
//! ### 5. The Boundary ([`backend`])
//! The order-creation and identity collaborator traits, with in-memory
//! implementations for the demo and tests.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! [`GuestOrderSystem`](lifecycle::GuestOrderSystem) spins up the actors,
//! wires the collaborators, and shuts everything down gracefully.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo flow with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```
//!
//! ## 🧪 Testing
//!
//! See [`framework::mock`] for utilities to test clients without spawning
//! full actors, and `tests/` for coordinator scenarios (concurrent
//! submission, backend failure, cancellation).

pub mod backend;
pub mod cart_actor;
pub mod checkout;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod pricing;
