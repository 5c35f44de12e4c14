//! Form entity: immutable snapshots of a form and its registered fields

use super::field::{FieldValidation, FieldValidator, FieldValue, RegisteredField};
use crate::error::FormError;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Captured field values keyed by field name
pub type FormData = BTreeMap<String, FieldValue>;

/// Lifecycle status of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Raw state held by a [`FormEntity`]
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub status: FormStatus,
    /// Registered fields in registration order
    pub fields: Vec<RegisteredField>,
    pub submit_attempts: u32,
    pub submit_error: Option<String>,
}

/// Aggregate result of validating every field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormValidationResult {
    pub valid: bool,
    pub field_errors: BTreeMap<String, String>,
    pub error_count: usize,
}

/// Immutable form snapshot. Every transition validates and returns a new one.
#[derive(Debug, Clone, Default)]
pub struct FormEntity {
    state: FormState,
}

impl FormEntity {
    /// Create an empty idle form
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form from raw state, checking every invariant
    pub fn from_state(state: FormState) -> Result<Self, FormError> {
        Self::validate_state(&state)?;
        Ok(Self { state })
    }

    fn validate_state(state: &FormState) -> Result<(), FormError> {
        match state.status {
            FormStatus::Submitting if state.submit_error.is_some() => {
                return Err(FormError::SubmitErrorWhileSubmitting)
            }
            FormStatus::Success if state.submit_error.is_some() => {
                return Err(FormError::SubmitErrorOnSuccess)
            }
            FormStatus::Error if state.submit_error.is_none() => {
                return Err(FormError::MissingSubmitError)
            }
            _ => {}
        }

        let mut seen = HashSet::new();
        for field in &state.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
        }
        Ok(())
    }

    /// Defensive copy of the current state
    pub fn current_state(&self) -> FormState {
        self.state.clone()
    }

    pub fn status(&self) -> FormStatus {
        self.state.status
    }

    pub fn submit_attempts(&self) -> u32 {
        self.state.submit_attempts
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.state.submit_error.as_deref()
    }

    pub fn fields(&self) -> &[RegisteredField] {
        &self.state.fields
    }

    pub fn field(&self, name: &str) -> Option<&RegisteredField> {
        self.state.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Current value of every field
    pub fn values(&self) -> FormData {
        self.state
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    // Derived state

    pub fn is_pristine(&self) -> bool {
        !self.state.fields.iter().any(|f| f.dirty)
    }

    pub fn is_dirty(&self) -> bool {
        !self.is_pristine()
    }

    pub fn is_touched(&self) -> bool {
        self.state.fields.iter().any(|f| f.touched)
    }

    /// Recomputes validation; stored errors are not consulted.
    pub fn is_valid(&self) -> bool {
        self.validate_all_fields().valid
    }

    /// Whether any field currently stores an error
    pub fn has_errors(&self) -> bool {
        self.state.fields.iter().any(|f| f.error.is_some())
    }

    pub fn is_submitting(&self) -> bool {
        self.state.status == FormStatus::Submitting
    }

    pub fn field_count(&self) -> usize {
        self.state.fields.len()
    }

    /// Number of fields currently storing an error
    pub fn error_count(&self) -> usize {
        self.state.fields.iter().filter(|f| f.error.is_some()).count()
    }

    pub fn touched_count(&self) -> usize {
        self.state.fields.iter().filter(|f| f.touched).count()
    }

    pub fn dirty_count(&self) -> usize {
        self.state.fields.iter().filter(|f| f.dirty).count()
    }

    // Transitions

    fn with_state(&self, state: FormState) -> Result<Self, FormError> {
        Self::from_state(state)
    }

    fn update_field<F>(&self, name: &str, update: F) -> Result<Self, FormError>
    where
        F: FnOnce(&mut RegisteredField),
    {
        let mut state = self.current_state();
        let field = state
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        update(field);
        self.with_state(state)
    }

    /// Register a field, replacing any existing field of the same name.
    ///
    /// Name emptiness is checked by the `RegisterField` use-case.
    pub fn register_field(
        &self,
        name: &str,
        initial_value: Option<FieldValue>,
        required: bool,
        validator: Option<FieldValidator>,
    ) -> Result<Self, FormError> {
        let field = RegisteredField::new(
            name,
            initial_value.unwrap_or_else(FieldValue::empty),
            required,
            validator,
        );
        let mut state = self.current_state();
        match state.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => *existing = field,
            None => state.fields.push(field),
        }
        self.with_state(state)
    }

    /// Remove a field; unknown names are ignored
    pub fn unregister_field(&self, name: &str) -> Self {
        let mut state = self.current_state();
        state.fields.retain(|f| f.name != name);
        Self { state }
    }

    /// Set a field's value, marking it dirty and clearing its error
    pub fn set_field_value(&self, name: &str, value: FieldValue) -> Result<Self, FormError> {
        self.update_field(name, |field| {
            field.value = value;
            field.dirty = true;
            field.error = None;
        })
    }

    pub fn touch_field(&self, name: &str) -> Result<Self, FormError> {
        self.update_field(name, |field| field.touched = true)
    }

    pub fn set_field_error(&self, name: &str, error: Option<String>) -> Result<Self, FormError> {
        self.update_field(name, |field| field.error = error)
    }

    /// Touch every registered field
    pub fn touch_all_fields(&self) -> Self {
        let mut state = self.current_state();
        for field in &mut state.fields {
            field.touched = true;
        }
        Self { state }
    }

    /// Validate one field without storing the outcome
    pub fn validate_field(&self, name: &str) -> Result<FieldValidation, FormError> {
        self.field(name)
            .map(RegisteredField::validate)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Validate every field without storing the outcome
    pub fn validate_all_fields(&self) -> FormValidationResult {
        let field_errors: BTreeMap<String, String> = self
            .state
            .fields
            .iter()
            .filter_map(|f| f.validate().error.map(|e| (f.name.clone(), e)))
            .collect();
        FormValidationResult {
            valid: field_errors.is_empty(),
            error_count: field_errors.len(),
            field_errors,
        }
    }

    /// Clear every stored error, then store the errors present in `result`
    pub fn with_validation_results(&self, result: &FormValidationResult) -> Self {
        let mut state = self.current_state();
        for field in &mut state.fields {
            field.error = result.field_errors.get(&field.name).cloned();
        }
        Self { state }
    }

    /// Move to `status`. Submitting and success drop any submit error;
    /// error requires one to be set already.
    pub fn with_status(&self, status: FormStatus) -> Result<Self, FormError> {
        let mut state = self.current_state();
        state.status = status;
        if matches!(status, FormStatus::Submitting | FormStatus::Success) {
            state.submit_error = None;
        }
        self.with_state(state)
    }

    /// `None` returns the form to idle, `Some` moves it to error
    pub fn with_submit_error(&self, error: Option<String>) -> Self {
        let mut state = self.current_state();
        state.status = if error.is_some() {
            FormStatus::Error
        } else {
            FormStatus::Idle
        };
        state.submit_error = error;
        Self { state }
    }

    pub fn increment_submit_attempts(&self) -> Self {
        let mut state = self.current_state();
        state.submit_attempts = state.submit_attempts.saturating_add(1);
        Self { state }
    }

    /// Clear every field back to empty text and the form back to idle
    pub fn reset(&self) -> Self {
        self.reset_with_values(&HashMap::new())
    }

    /// Like [`reset`](Self::reset), using `values` where supplied
    pub fn reset_with_values(&self, values: &HashMap<String, FieldValue>) -> Self {
        let fields = self
            .state
            .fields
            .iter()
            .map(|f| {
                let value = values.get(&f.name).cloned().unwrap_or_else(FieldValue::empty);
                f.reset_to(value)
            })
            .collect();
        Self {
            state: FormState {
                status: FormStatus::Idle,
                fields,
                submit_attempts: 0,
                submit_error: None,
            },
        }
    }
}
