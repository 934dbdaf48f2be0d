//! Error types for the product dialog.

use crate::model::ParseFieldError;
use thiserror::Error;

/// Why a save was refused before any write was attempted.
///
/// The display text is the message shown in the dialog's error banner.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Name, quantity or price is empty or zero.
    #[error("Please fill all data")]
    MissingFields,

    /// No authenticated user was supplied.
    #[error("Please log in")]
    AuthRequired,
}

/// Errors returned by [`DialogClient`](crate::dialog::DialogClient) calls.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DialogError {
    /// The request needs an open dialog.
    #[error("Dialog is not open")]
    NotOpen,

    /// A write is already in flight; the save action is disabled.
    #[error("A save is already in progress")]
    SaveInProgress,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    UnknownField(#[from] ParseFieldError),

    #[error("Dialog actor closed")]
    ActorClosed,

    #[error("Dialog actor dropped response channel")]
    ActorDropped,
}
