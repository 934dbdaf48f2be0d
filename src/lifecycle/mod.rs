//! # System Lifecycle
//!
//! Starts, wires and stops the actors behind the product dialog.
//!
//! 1. **Actor Creation** - the store actor and the dialog actor, each with its client
//! 2. **Dependency Injection** - the store client is passed to the dialog actor's `run()`
//! 3. **Graceful Shutdown** - dropping the clients closes the channels; each actor
//!    drains and exits
//!
//! [`setup_tracing`] initializes structured logging for the whole process.

pub mod inventory_system;
pub mod tracing;

pub use self::inventory_system::*;
pub use self::tracing::*;
