//! Pure data structures: the persisted product, its identifiers and the transient form copy.

pub mod form;
pub mod product;

pub use form::*;
pub use product::*;
