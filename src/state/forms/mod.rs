//! Form domain layer
//!
//! Immutable form snapshots with registered fields, validation and
//! submit lifecycle.

mod field;
mod form_state;

pub use field::{FieldValidation, FieldValidator, FieldValue, RegisteredField};
pub use form_state::{FormData, FormEntity, FormState, FormStatus, FormValidationResult};
