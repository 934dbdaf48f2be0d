//! Error types for the document store.

use thiserror::Error;

/// Errors surfaced by a [`DocumentStore`](crate::store::DocumentStore) write or read.
///
/// Store-reported variants display their message verbatim, since that text is
/// shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The caller may not write to the path.
    #[error("{0}")]
    PermissionDenied(String),

    /// The store could not be reached.
    #[error("{0}")]
    Unavailable(String),

    /// A quota or rate limit was hit.
    #[error("{0}")]
    ResourceExhausted(String),

    #[error("{0}")]
    Other(String),

    #[error("Store actor closed")]
    ActorClosed,

    #[error("Store actor dropped response channel")]
    ActorDropped,
}

impl From<String> for StoreError {
    fn from(msg: String) -> Self {
        StoreError::Other(msg)
    }
}
