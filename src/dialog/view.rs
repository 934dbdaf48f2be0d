//! # Presentation
//!
//! A snapshot of what the dialog shows: labelled inputs, the read-only total, the
//! error banner and the close/save actions. [`Display`] renders it as plain text.

use super::state::{DialogState, Phase};
use crate::model::{ProductField, NAME_LABEL, PRICE_LABEL, QTY_LABEL, TOTAL_LABEL};
use std::fmt::Display;

pub const CREATE_TITLE: &str = "Add new product:";
pub const UPDATE_TITLE: &str = "Update product:";

#[derive(Debug, Clone, PartialEq)]
pub struct DialogView {
    pub phase: Phase,
    pub title: &'static str,
    pub name: String,
    pub qty: String,
    pub price: String,
    /// `qty * price` as `$` and two decimals.
    pub total: String,
    pub error: Option<String>,
    pub save_enabled: bool,
}

impl DialogView {
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }
}

impl From<&DialogState> for DialogView {
    fn from(state: &DialogState) -> Self {
        let form = state.form();
        Self {
            phase: state.phase(),
            title: if state.source().is_some() {
                UPDATE_TITLE
            } else {
                CREATE_TITLE
            },
            name: form.display_value(ProductField::Name),
            qty: form.display_value(ProductField::Qty),
            price: form.display_value(ProductField::Price),
            total: form.formatted_total(),
            error: state.error().map(str::to_string),
            save_enabled: !state.is_loading(),
        }
    }
}

impl Display for DialogView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_open() {
            return writeln!(f, "(closed)");
        }
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  {}: {}", NAME_LABEL, self.name)?;
        writeln!(f, "  {}: {}    {}: {}", QTY_LABEL, self.qty, PRICE_LABEL, self.price)?;
        writeln!(f, "  {}: {}", TOTAL_LABEL, self.total)?;
        if let Some(error) = &self.error {
            writeln!(f, "  ! {}", error)?;
        }
        let save = if self.save_enabled { "[Save]" } else { "[Saving...]" };
        writeln!(f, "  [Close] {}", save)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, UserId};

    #[test]
    fn test_view_of_new_product() {
        let mut state = DialogState::new();
        state.open(None);
        state.edit(ProductField::Qty, "3").unwrap();
        state.edit(ProductField::Price, "2.5").unwrap();

        let view = DialogView::from(&state);
        assert_eq!(view.title, CREATE_TITLE);
        assert_eq!(view.total, "$7.50");
        assert!(view.save_enabled);

        let text = view.to_string();
        assert!(text.contains("Add new product:"));
        assert!(text.contains("Total: $7.50"));
    }

    #[test]
    fn test_view_while_submitting() {
        let mut state = DialogState::new();
        state.open(Some(Product::new("Widget", 2.0, 4.0).with_id("p1")));
        state.begin_save(Some(&UserId::from("u1"))).unwrap();

        let view = DialogView::from(&state);
        assert_eq!(view.title, UPDATE_TITLE);
        assert_eq!(view.phase, Phase::Submitting);
        assert!(!view.save_enabled);
        assert_eq!(view.qty, "2");
    }

    #[test]
    fn test_view_shows_error_banner() {
        let mut state = DialogState::new();
        state.open(None);
        let _ = state.begin_save(None);

        let view = DialogView::from(&state);
        assert_eq!(view.error.as_deref(), Some("Please fill all data"));
        assert!(view.to_string().contains("! Please fill all data"));
    }

    #[test]
    fn test_closed_view() {
        let view = DialogView::from(&DialogState::new());
        assert!(!view.is_open());
        assert_eq!(view.to_string(), "(closed)\n");
    }
}
