//! # Observability & Tracing
//!
//! Structured logging for the whole actor system, built on the `tracing`
//! crate.
//!
//! The subscriber uses a compact format and hides module paths
//! (`with_target(false)`); actor logs carry an `entity_type` field instead,
//! and client methods open spans via `#[instrument]`, so a submission shows
//! up as a hierarchy like `submit: Submitting order draft to backend`.
//!
//! Verbosity is controlled with `RUST_LOG`:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Full payloads at function entry points
//! RUST_LOG=debug cargo run
//!
//! # Filter to one layer
//! RUST_LOG=guest_orders::framework=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type fields replace module paths
        .compact()
        .init();
}
