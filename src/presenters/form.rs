//! Form presenter

use crate::state::{FieldValue, FormEntity, FormStatus, RegisteredField};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViewModel {
    pub name: String,
    pub value: FieldValue,
    pub display_value: String,
    pub error: Option<String>,
    pub touched: bool,
    pub dirty: bool,
    pub required: bool,
    /// Errors are only shown once the user has visited the field
    pub show_error: bool,
    pub aria_invalid: bool,
    pub aria_required: bool,
}

impl From<&RegisteredField> for FieldViewModel {
    fn from(field: &RegisteredField) -> Self {
        Self {
            name: field.name.clone(),
            value: field.value.clone(),
            display_value: field.value.display_value(),
            error: field.error.clone(),
            touched: field.touched,
            dirty: field.dirty,
            required: field.required,
            show_error: field.touched && field.error.is_some(),
            aria_invalid: field.error.is_some(),
            aria_required: field.required,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormViewModel {
    pub status: FormStatus,
    pub is_submitting: bool,
    pub is_success: bool,
    pub is_valid: bool,
    pub is_dirty: bool,
    pub is_pristine: bool,
    pub is_touched: bool,
    pub has_errors: bool,
    pub field_count: usize,
    pub error_count: usize,
    pub submit_attempts: u32,
    pub submit_error: Option<String>,
    pub can_submit: bool,
    pub fields: Vec<FieldViewModel>,
}

pub struct FormPresenter;

impl FormPresenter {
    pub fn present(form: &FormEntity) -> FormViewModel {
        let is_valid = form.is_valid();
        let is_submitting = form.is_submitting();
        FormViewModel {
            status: form.status(),
            is_submitting,
            is_success: form.status() == FormStatus::Success,
            is_valid,
            is_dirty: form.is_dirty(),
            is_pristine: form.is_pristine(),
            is_touched: form.is_touched(),
            has_errors: form.has_errors(),
            field_count: form.field_count(),
            error_count: form.error_count(),
            submit_attempts: form.submit_attempts(),
            submit_error: form.submit_error().map(str::to_string),
            can_submit: is_valid && !is_submitting,
            fields: form.fields().iter().map(FieldViewModel::from).collect(),
        }
    }
}
