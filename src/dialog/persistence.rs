//! # Persistence Adapter
//!
//! Turns a [`PendingSave`] into exactly one upsert.

use super::state::PendingSave;
use crate::model::ProductDocument;
use crate::store::{DocumentPath, DocumentStore, StoreError};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Create,
    Update,
}

/// Where and what to write.
#[derive(Debug, Clone, PartialEq)]
pub struct WritePlan {
    pub kind: WriteKind,
    pub path: DocumentPath,
    pub document: ProductDocument,
}

/// Resolves the target document.
///
/// Updates keep the existing identifier. Creates ask the store for a fresh one, so
/// every create lands on a new path.
pub fn plan(pending: PendingSave, store: &dyn DocumentStore) -> WritePlan {
    let (kind, product) = match pending.existing {
        Some(id) => (WriteKind::Update, id),
        None => (WriteKind::Create, store.new_document_id()),
    };
    WritePlan {
        kind,
        path: DocumentPath::new(pending.user, product),
        document: pending.document,
    }
}

/// Performs the write. No retry.
pub async fn execute(store: &dyn DocumentStore, plan: &WritePlan) -> Result<(), StoreError> {
    let result = store.upsert(&plan.path, plan.document.clone()).await;
    match &result {
        Ok(()) => info!(path = %plan.path, kind = ?plan.kind, "Product saved"),
        Err(e) => warn!(path = %plan.path, kind = ?plan.kind, error = %e, "Product save failed"),
    }
    result
}
