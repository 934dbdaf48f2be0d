//! Save-time validation.

use super::error::ValidationError;
use crate::model::{ProductForm, UserId};

/// Checks the form and the acting user before a save.
///
/// Fields are checked first, so an anonymous user with an incomplete form sees
/// [`ValidationError::MissingFields`]. A quantity or price of exactly zero counts as
/// missing.
pub fn validate<'a>(
    form: &ProductForm,
    user: Option<&'a UserId>,
) -> Result<&'a UserId, ValidationError> {
    let filled = !form.name.is_empty() && form.qty.is_truthy() && form.price.is_truthy();
    if !filled {
        return Err(ValidationError::MissingFields);
    }
    user.ok_or(ValidationError::AuthRequired)
}
