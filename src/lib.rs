//! # Product Dialog
//!
//! > **A headless create/edit dialog for per-user product inventories.**
//!
//! The dialog holds a transient copy of one product (name, quantity, price), validates
//! it on save and upserts a single document at `users/{uid}/products/{id}` in a
//! document store. The displayed total is `qty * price`, always with two decimals.
//!
//! ## 🏗️ Design
//!
//! ### Explicit dependencies
//! The current user is an argument of [`save`](dialog::DialogClient::save), and the
//! store is an injected [`DocumentStore`](store::DocumentStore) trait object handed to
//! the dialog actor's `run()`. Nothing is read from ambient globals.
//!
//! ### Outcomes instead of callbacks
//! A save resolves to a [`SaveOutcome`](dialog::SaveOutcome):
//! `Saved`, `ValidationFailed` or `StoreFailed`. `Saved` means the dialog has already
//! closed; the caller refreshes its list and moves on. Failures leave the dialog open
//! with the error banner set.
//!
//! ### Concurrency Model
//! Each dialog instance is an actor processing user events sequentially. The single
//! write runs in its own task while the actor keeps serving events, and the loading
//! flag refuses a second save until it completes. Writes are never cancelled or retried.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: [`Product`](model::Product), [`ProductDocument`](model::ProductDocument)
//!   and the [`ProductForm`](model::ProductForm) under edit.
//! - [`store`]: the [`DocumentStore`](store::DocumentStore) seam, an in-memory store
//!   actor and a [`mock`](store::mock) for tests.
//! - [`dialog`]: state machine, validator, persistence adapter, actor, client and view.
//! - [`lifecycle`]: [`InventorySystem`](lifecycle::InventorySystem) wiring and
//!   [`setup_tracing`](lifecycle::setup_tracing).
//! - [`config`]: channel capacities from the environment.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod config;
pub mod dialog;
pub mod lifecycle;
pub mod model;
pub mod store;
