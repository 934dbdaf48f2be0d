//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Levels are controlled through `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # opens, saves, store writes
//! RUST_LOG=debug cargo run    # every request with its payload
//! ```
//!
//! With `RUST_LOG=info` a successful create reads:
//!
//! ```text
//! INFO Dialog actor started
//! INFO Opened reseeded=true
//! INFO Writing product path=users/alice/products/Xb3... kind=Create
//! INFO product_write:upsert: Written path=users/alice/products/Xb3... replaced=false size=1
//! INFO product_write: Product saved path=users/alice/products/Xb3... kind=Create
//! INFO Save finished outcome=Saved(...) phase=Closed
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
