/// Represents a product in a user's inventory.
///
/// A `Product` is what the caller hands to the dialog for editing. Records loaded
/// from the store carry an [`id`](Product::id); a product without one is new.
///
/// See [`ProductDocument`] for the body that is actually written to the store.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Identifier of the authenticated user owning a product collection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    /// An empty identifier is treated the same as no identifier at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: String,
    pub qty: f64,
    pub price: f64,
}

impl Product {
    /// Creates a new, not yet persisted Product.
    ///
    /// # Arguments
    /// * `name` - Product name
    /// * `qty` - Quantity in stock
    /// * `price` - Unit price
    pub fn new(name: impl Into<String>, qty: f64, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            qty,
            price,
        }
    }

    /// Rebuilds a Product from a stored document and its identifier.
    pub fn from_document(id: ProductId, document: ProductDocument) -> Self {
        Self {
            id: Some(id),
            name: document.name,
            qty: document.qty,
            price: document.price,
        }
    }

    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Derived value, never stored.
    pub fn total(&self) -> f64 {
        self.qty * self.price
    }
}

/// The document body persisted at `users/{uid}/products/{id}`.
///
/// Writes always replace the whole document, so every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    pub name: String,
    pub qty: f64,
    pub price: f64,
}
