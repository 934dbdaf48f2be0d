//! # Document Store
//!
//! The seam between the dialog and the hosted document database.
//!
//! - [`DocumentStore`]: the trait the dialog writes through. Injected, never global.
//! - [`DocumentPath`]: the hierarchical key `users/{uid}/products/{id}`.
//! - [`memory`]: an in-memory store actor and its [`StoreClient`](memory::StoreClient).
//! - [`mock`]: an expectation-driven store for tests.

pub mod error;
pub mod memory;
pub mod mock;

pub use error::*;
pub use memory::StoreClient;

use crate::model::{ProductDocument, ProductId, UserId};
use async_trait::async_trait;
use rand::distr::Alphanumeric;
use rand::Rng;
use std::fmt::Display;

pub const USERS_COLLECTION: &str = "users";
pub const PRODUCTS_COLLECTION: &str = "products";

/// Length of identifiers produced by [`generate_document_id`].
pub const AUTO_ID_LEN: usize = 20;

/// Location of one product document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentPath {
    pub user: UserId,
    pub product: ProductId,
}

impl DocumentPath {
    pub fn new(user: UserId, product: ProductId) -> Self {
        Self { user, product }
    }
}

impl Display for DocumentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", collection_path(&self.user), self.product)
    }
}

/// `users/{uid}/products`
pub fn collection_path(user: &UserId) -> String {
    format!("{}/{}/{}", USERS_COLLECTION, user, PRODUCTS_COLLECTION)
}

/// Generates a fresh client-side document identifier.
pub fn generate_document_id() -> ProductId {
    let id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(AUTO_ID_LEN)
        .map(char::from)
        .collect();
    ProductId(id)
}

/// A document database holding per-user product collections.
///
/// Implementations must treat [`upsert`](DocumentStore::upsert) as a full replace:
/// the document at `path` afterwards equals `document`, whether or not it existed.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Identifier for a document that does not exist yet.
    fn new_document_id(&self) -> ProductId {
        generate_document_id()
    }

    /// Creates or fully replaces the document at `path`.
    async fn upsert(&self, path: &DocumentPath, document: ProductDocument)
        -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_path_display() {
        let path = DocumentPath::new(UserId::from("u1"), ProductId::from("p1"));
        assert_eq!(path.to_string(), "users/u1/products/p1");
    }

    #[test]
    fn test_generated_ids_are_fresh() {
        let first = generate_document_id();
        let second = generate_document_id();

        assert_eq!(first.0.len(), AUTO_ID_LEN);
        assert!(first.0.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(first, second);
    }
}
