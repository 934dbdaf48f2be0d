//! # Product Dialog
//!
//! The modal dialog that creates or edits one product.
//!
//! ## Structure
//!
//! - [`state`] - [`DialogState`], the form state holder and its state machine
//! - [`validate`] - save-time checks
//! - [`persistence`] - create/update resolution and the single upsert
//! - [`view`] - [`DialogView`], what the dialog shows
//! - [`actor`] / [`client`] - the event loop and its handle
//! - [`error`] - [`DialogError`] and [`ValidationError`]
//!
//! ## Usage
//!
//! ```rust
//! use product_dialog::dialog::{self, SaveOutcome};
//! use product_dialog::model::{ProductField, UserId};
//! use product_dialog::store::{self, DocumentStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (store_actor, store_client) = store::memory::new(32);
//!     tokio::spawn(store_actor.run());
//!
//!     let (actor, client) = dialog::new(32);
//!     let store: Arc<dyn DocumentStore> = Arc::new(store_client);
//!     tokio::spawn(actor.run(store));
//!
//!     client.open(None).await?;
//!     client.edit(ProductField::Name, "Widget").await?;
//!     client.edit(ProductField::Qty, "3").await?;
//!     client.edit(ProductField::Price, "2.5").await?;
//!
//!     let outcome = client.save(Some(UserId::from("alice"))).await?;
//!     assert!(matches!(outcome, SaveOutcome::Saved(_)));
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod persistence;
pub mod state;
pub mod validate;
pub mod view;

pub use actor::*;
pub use client::*;
pub use error::*;
pub use state::{DialogState, PendingSave, Phase, SaveOutcome};
pub use view::DialogView;

/// Creates a new dialog actor and its client.
pub fn new(buffer_size: usize) -> (DialogActor, DialogClient) {
    DialogActor::new(buffer_size)
}
