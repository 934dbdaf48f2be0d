//! # Dialog State Machine
//!
//! [`DialogState`] holds everything one dialog instance knows: whether it is open,
//! the product it was opened with, the transient form copy, the error banner and the
//! loading flag. It is plain data with synchronous transitions; the
//! [`DialogActor`](crate::dialog::DialogActor) drives it and performs the write.
//!
//! ```text
//! Closed --open--> Open/Idle --save ok--> Open/Submitting --write ok--> Closed
//!                     ^  |                        |
//!                edit |  | save invalid           | write failed
//!                     |  v                        v
//!                  Open/Errored <-----------------+
//! ```
//!
//! Closing is allowed from any open sub-state and discards unsaved edits.

use super::error::{DialogError, ValidationError};
use super::validate::validate;
use crate::model::{Product, ProductDocument, ProductField, ProductForm, ProductId, UserId};
use crate::store::{DocumentPath, StoreError};

/// Observable state of a dialog instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    /// Awaiting input.
    Idle,
    /// A write is in flight; save is disabled.
    Submitting,
    /// The error banner is showing; save is enabled.
    Errored,
}

/// Result of a save request that reached the dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The document was written and the dialog has closed.
    Saved(DocumentPath),
    /// Nothing was written.
    ValidationFailed(ValidationError),
    /// The store rejected the write. Carries the store's message verbatim.
    StoreFailed(String),
}

/// A validated save, captured at the moment save was pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSave {
    pub user: UserId,
    /// Identifier of the product the dialog was opened with, if it had one.
    pub existing: Option<ProductId>,
    pub document: ProductDocument,
}

#[derive(Debug, Clone)]
pub struct DialogState {
    open: bool,
    source: Option<Product>,
    form: ProductForm,
    error: Option<String>,
    loading: bool,
}

impl DialogState {
    pub fn new() -> Self {
        Self {
            open: false,
            source: None,
            form: ProductForm::blank(),
            error: None,
            loading: false,
        }
    }

    /// Opens the dialog for `product`, or for a new product when `None`.
    ///
    /// The form is reseeded when the dialog was closed or when `product` differs
    /// from the one it is currently showing. Returns whether it was reseeded.
    pub fn open(&mut self, product: Option<Product>) -> bool {
        if self.open && self.source == product {
            return false;
        }
        self.open = true;
        self.form = ProductForm::seed(product.as_ref());
        self.source = product;
        self.error = None;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Stores raw input for `field` and clears the error banner.
    pub fn edit(&mut self, field: ProductField, raw: impl Into<String>) -> Result<(), DialogError> {
        if !self.open {
            return Err(DialogError::NotOpen);
        }
        self.error = None;
        self.form.set(field, raw);
        Ok(())
    }

    /// Validates the form and, on success, marks the dialog as submitting.
    ///
    /// Validation failures set the error banner and are returned as
    /// [`DialogError::Invalid`].
    pub fn begin_save(&mut self, user: Option<&UserId>) -> Result<PendingSave, DialogError> {
        if !self.open {
            return Err(DialogError::NotOpen);
        }
        if self.loading {
            return Err(DialogError::SaveInProgress);
        }
        let user = match validate(&self.form, user) {
            Ok(user) => user.clone(),
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(DialogError::Invalid(e));
            }
        };

        self.error = None;
        self.loading = true;
        Ok(PendingSave {
            user,
            existing: self
                .source
                .as_ref()
                .and_then(|product| product.id.clone())
                .filter(|id| !id.is_empty()),
            document: self.form.to_document(),
        })
    }

    /// Applies the result of the write started by [`begin_save`](Self::begin_save).
    pub fn finish_save(&mut self, path: DocumentPath, result: Result<(), StoreError>) -> SaveOutcome {
        self.loading = false;
        match result {
            Ok(()) => {
                self.close();
                SaveOutcome::Saved(path)
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                SaveOutcome::StoreFailed(message)
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.open {
            Phase::Closed
        } else if self.loading {
            Phase::Submitting
        } else if self.error.is_some() {
            Phase::Errored
        } else {
            Phase::Idle
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn source(&self) -> Option<&Product> {
        self.source.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for DialogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldValue;

    fn widget() -> Product {
        Product::new("Widget", 3.0, 2.5).with_id("p1")
    }

    fn filled_state() -> DialogState {
        let mut state = DialogState::new();
        state.open(None);
        state.edit(ProductField::Name, "Bolt").unwrap();
        state.edit(ProductField::Qty, "4").unwrap();
        state.edit(ProductField::Price, "0.5").unwrap();
        state
    }

    #[test]
    fn test_open_blank_and_existing() {
        let mut state = DialogState::new();
        assert_eq!(state.phase(), Phase::Closed);

        state.open(None);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.form(), &ProductForm::blank());

        state.close();
        state.open(Some(widget()));
        assert_eq!(state.form(), &ProductForm::from_product(&widget()));
    }

    #[test]
    fn test_reopen_with_other_product_reseeds() {
        let mut state = DialogState::new();
        state.open(Some(widget()));
        state.edit(ProductField::Name, "Edited").unwrap();

        assert!(!state.open(Some(widget())));
        assert_eq!(state.form().name, "Edited");

        let other = Product::new("Gadget", 1.0, 1.0).with_id("p2");
        assert!(state.open(Some(other.clone())));
        assert_eq!(state.form(), &ProductForm::from_product(&other));
    }

    #[test]
    fn test_edit_requires_open_dialog() {
        let mut state = DialogState::new();
        assert_eq!(
            state.edit(ProductField::Name, "x"),
            Err(DialogError::NotOpen)
        );
    }

    #[test]
    fn test_invalid_save_sets_error_until_next_edit() {
        let mut state = DialogState::new();
        state.open(None);

        let result = state.begin_save(Some(&UserId::from("u1")));
        assert_eq!(
            result,
            Err(DialogError::Invalid(ValidationError::MissingFields))
        );
        assert_eq!(state.error(), Some("Please fill all data"));
        assert_eq!(state.phase(), Phase::Errored);
        assert!(!state.is_loading());

        state.edit(ProductField::Name, "Bolt").unwrap();
        assert_eq!(state.error(), None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_begin_save_builds_pending_write() {
        let mut state = filled_state();
        let pending = state.begin_save(Some(&UserId::from("u1"))).unwrap();

        assert_eq!(pending.user, UserId::from("u1"));
        assert_eq!(pending.existing, None);
        assert_eq!(pending.document.qty, 4.0);
        assert_eq!(pending.document.price, 0.5);
        assert_eq!(state.phase(), Phase::Submitting);

        assert_eq!(
            state.begin_save(Some(&UserId::from("u1"))),
            Err(DialogError::SaveInProgress)
        );
    }

    #[test]
    fn test_existing_id_is_taken_from_source() {
        let mut state = DialogState::new();
        state.open(Some(widget()));
        let pending = state.begin_save(Some(&UserId::from("u1"))).unwrap();
        assert_eq!(pending.existing, Some(ProductId::from("p1")));

        let mut state = DialogState::new();
        state.open(Some(Product::new("Widget", 1.0, 1.0).with_id("")));
        let pending = state.begin_save(Some(&UserId::from("u1"))).unwrap();
        assert_eq!(pending.existing, None);
    }

    #[test]
    fn test_finish_save_success_closes() {
        let mut state = filled_state();
        state.begin_save(Some(&UserId::from("u1"))).unwrap();

        let path = DocumentPath::new(UserId::from("u1"), ProductId::from("p9"));
        let outcome = state.finish_save(path.clone(), Ok(()));

        assert_eq!(outcome, SaveOutcome::Saved(path));
        assert_eq!(state.phase(), Phase::Closed);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_finish_save_failure_keeps_form() {
        let mut state = filled_state();
        state.begin_save(Some(&UserId::from("u1"))).unwrap();

        let path = DocumentPath::new(UserId::from("u1"), ProductId::from("p9"));
        let outcome = state.finish_save(
            path,
            Err(StoreError::PermissionDenied(
                "Missing or insufficient permissions.".to_string(),
            )),
        );

        assert_eq!(
            outcome,
            SaveOutcome::StoreFailed("Missing or insufficient permissions.".to_string())
        );
        assert_eq!(state.phase(), Phase::Errored);
        assert_eq!(state.form().qty, FieldValue::Text("4".to_string()));
    }

    #[test]
    fn test_open_clears_previous_error() {
        let mut state = DialogState::new();
        state.open(None);
        let _ = state.begin_save(None);
        state.close();

        state.open(None);
        assert_eq!(state.error(), None);
    }
}
