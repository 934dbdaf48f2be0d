//! # Mock Store
//!
//! Utilities for testing the dialog without a real database.
//!
//! Queue expectations with [`MockStore::expect_upsert`], hand the store to the code
//! under test, then inspect [`MockStore::calls`] and finish with [`MockStore::verify`].
//!
//! This module is compiled unconditionally so integration tests in `tests/` can use it.
//!
//! ```rust,ignore
//! let store = Arc::new(MockStore::new());
//! store.expect_upsert().return_ok();
//! store.expect_upsert().return_err(StoreError::PermissionDenied("denied".into()));
//! // ... drive the dialog ...
//! store.verify();
//! ```

use super::{DocumentPath, DocumentStore, StoreError};
use crate::model::{ProductDocument, ProductId};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// One queued upsert response.
struct Expectation {
    response: Result<(), StoreError>,
    gate: Option<Arc<Notify>>,
}

/// An upsert the mock received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedUpsert {
    pub path: DocumentPath,
    pub document: ProductDocument,
}

/// A [`DocumentStore`] that answers from a queue of expectations.
///
/// Generated ids are deterministic: `mock_1`, `mock_2`, ...
pub struct MockStore {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<RecordedUpsert>>>,
    next_id: AtomicU32,
}

impl MockStore {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicU32::new(1),
        }
    }

    /// Expects an `upsert` operation.
    pub fn expect_upsert(&self) -> UpsertExpectationBuilder {
        UpsertExpectationBuilder {
            gate: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Every upsert received so far, in order.
    pub fn calls(&self) -> Vec<RecordedUpsert> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MockStore {
    fn new_document_id(&self) -> ProductId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        ProductId(format!("mock_{}", id))
    }

    async fn upsert(
        &self,
        path: &DocumentPath,
        document: ProductDocument,
    ) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(RecordedUpsert {
            path: path.clone(),
            document,
        });

        let expectation = self.expectations.lock().unwrap().pop_front();
        let Some(expectation) = expectation else {
            panic!("Unexpected upsert to {}", path);
        };

        if let Some(gate) = expectation.gate {
            gate.notified().await;
        }
        expectation.response
    }
}

/// Builder for `upsert` expectations.
pub struct UpsertExpectationBuilder {
    gate: Option<Arc<Notify>>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl UpsertExpectationBuilder {
    /// Holds the write in flight until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), StoreError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            response,
            gate: self.gate,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;

    fn path(id: &str) -> DocumentPath {
        DocumentPath::new(UserId::from("u1"), ProductId::from(id))
    }

    fn document() -> ProductDocument {
        ProductDocument {
            name: "Widget".to_string(),
            qty: 1.0,
            price: 2.0,
        }
    }

    #[tokio::test]
    async fn test_mock_store_with_expectations() {
        let store = MockStore::new();
        store.expect_upsert().return_ok();
        store
            .expect_upsert()
            .return_err(StoreError::Unavailable("offline".to_string()));

        assert_eq!(store.upsert(&path("a"), document()).await, Ok(()));
        let err = store.upsert(&path("b"), document()).await.unwrap_err();
        assert_eq!(err.to_string(), "offline");

        let calls = store.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].path, path("b"));
        store.verify();
    }

    #[tokio::test]
    async fn test_gated_upsert_waits_for_release() {
        let store = Arc::new(MockStore::new());
        let gate = Arc::new(Notify::new());
        store.expect_upsert().gated(gate.clone()).return_ok();

        let task = {
            let store = store.clone();
            tokio::spawn(async move { store.upsert(&path("a"), document()).await })
        };

        tokio::task::yield_now().await;
        assert!(!task.is_finished());

        gate.notify_one();
        assert_eq!(task.await.unwrap(), Ok(()));
    }

    #[test]
    fn test_ids_are_deterministic() {
        let store = MockStore::new();
        assert_eq!(store.new_document_id(), ProductId::from("mock_1"));
        assert_eq!(store.new_document_id(), ProductId::from("mock_2"));
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_panics_on_leftovers() {
        let store = MockStore::new();
        store.expect_upsert().return_ok();
        store.verify();
    }
}
