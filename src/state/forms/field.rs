//! Form field value objects

use crate::state::REQUIRED_MESSAGE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
    #[default]
    #[serde(skip_deserializing)]
    Undefined,
}

impl FieldValue {
    /// Empty text, the value every field starts from and resets to
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    /// Whether the value counts as missing for the required check
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Null | FieldValue::Undefined => true,
            FieldValue::Number(_) | FieldValue::Bool(_) => false,
        }
    }

    /// Get the text value (returns None for non-text values)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Null | FieldValue::Undefined => String::new(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Caller-supplied validator; returns an error message when the value is invalid.
///
/// Cloning shares the same closure, so the validator survives every
/// snapshot copy of the field it belongs to.
#[derive(Clone)]
pub struct FieldValidator(Arc<dyn Fn(&FieldValue) -> Option<String> + Send + Sync>);

impl FieldValidator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&FieldValue) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn check(&self, value: &FieldValue) -> Option<String> {
        (self.0)(value)
    }

    /// Whether two validators share the same closure
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldValidator(..)")
    }
}

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidation {
    pub valid: bool,
    pub error: Option<String>,
}

impl FieldValidation {
    pub fn passed() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }
}

/// A field registered on a form, with its value and interaction flags
#[derive(Debug, Clone)]
pub struct RegisteredField {
    pub name: String,
    pub value: FieldValue,
    pub error: Option<String>,
    pub touched: bool,
    pub dirty: bool,
    pub required: bool,
    pub validator: Option<FieldValidator>,
}

impl RegisteredField {
    /// Create a pristine field
    pub fn new(
        name: &str,
        value: FieldValue,
        required: bool,
        validator: Option<FieldValidator>,
    ) -> Self {
        Self {
            name: name.to_string(),
            value,
            error: None,
            touched: false,
            dirty: false,
            required,
            validator,
        }
    }

    /// Required check first; the custom validator only runs when it passes.
    pub fn validate(&self) -> FieldValidation {
        if self.required && self.value.is_blank() {
            return FieldValidation::failed(REQUIRED_MESSAGE);
        }
        match self.validator.as_ref().and_then(|v| v.check(&self.value)) {
            Some(message) => FieldValidation::failed(message),
            None => FieldValidation::passed(),
        }
    }

    /// Return the field to its pristine state holding `value`
    pub fn reset_to(&self, value: FieldValue) -> Self {
        Self {
            value,
            error: None,
            touched: false,
            dirty: false,
            ..self.clone()
        }
    }
}
