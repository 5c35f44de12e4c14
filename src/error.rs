//! Invariant violations raised by entity construction and transitions
//!
//! These are programmer errors: callers propagate them, nothing in the
//! crate catches them. Business validation failures are never reported
//! through these types.

use thiserror::Error;

/// Errors raised by the form entity and its use-cases
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Field name cannot be empty")]
    EmptyFieldName,

    #[error("Field \"{0}\" is not registered")]
    UnknownField(String),

    #[error("Duplicate field name \"{0}\"")]
    DuplicateField(String),

    #[error("Submit error must be cleared while submitting")]
    SubmitErrorWhileSubmitting,

    #[error("Submit error must be cleared on success")]
    SubmitErrorOnSuccess,

    #[error("Error status requires a submit error")]
    MissingSubmitError,
}

/// Errors raised by the input entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Input cannot be both readOnly and required")]
    ReadOnlyRequired,

    #[error("Disabled input cannot have an error")]
    DisabledWithError,

    #[error("Input with an error message must be in error state")]
    ErrorWithoutErrorState,

    #[error("Unknown input {kind} \"{value}\"")]
    UnknownToken { kind: &'static str, value: String },
}

/// Errors raised by the switch entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwitchError {
    #[error("Switch value must be a boolean")]
    NonBooleanValue,

    #[error("Switch cannot be both disabled and readonly")]
    DisabledAndReadonly,

    #[error("Unknown switch variant \"{0}\"")]
    UnknownVariant(String),
}

/// Any invariant violation raised by the control-state core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Switch(#[from] SwitchError),
}
