//! Form use-cases: registration, validation, submit and reset protocols

use super::ValidationSignal;
use crate::error::FormError;
use crate::state::{
    FieldValidator, FieldValue, FormData, FormEntity, FormStatus, FormValidationResult,
};
use std::collections::{BTreeMap, HashMap};

/// Parameters for [`RegisterField`]
#[derive(Debug, Clone)]
pub struct RegisterFieldRequest {
    pub name: String,
    pub initial_value: Option<FieldValue>,
    pub required: bool,
    pub validator: Option<FieldValidator>,
}

impl RegisterFieldRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_value: None,
            required: false,
            validator: None,
        }
    }

    pub fn initial_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn validator(mut self, validator: FieldValidator) -> Self {
        self.validator = Some(validator);
        self
    }
}

#[derive(Debug, Clone)]
pub struct RegisterFieldResponse {
    pub success: bool,
    pub updated_form: FormEntity,
    pub field_name: String,
}

/// Registers a field after rejecting blank names
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterField;

impl RegisterField {
    pub fn execute(
        &self,
        form: &FormEntity,
        request: RegisterFieldRequest,
    ) -> Result<RegisterFieldResponse, FormError> {
        if request.name.trim().is_empty() {
            return Err(FormError::EmptyFieldName);
        }
        let updated_form = form.register_field(
            &request.name,
            request.initial_value,
            request.required,
            request.validator,
        )?;
        tracing::trace!("Registered field {:?}", request.name);
        Ok(RegisterFieldResponse {
            success: true,
            updated_form,
            field_name: request.name,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UnregisterFieldResponse {
    pub success: bool,
    pub updated_form: FormEntity,
    pub field_name: String,
}

/// Removes a field; unknown names succeed without change
#[derive(Debug, Clone, Copy, Default)]
pub struct UnregisterField;

impl UnregisterField {
    pub fn execute(&self, form: &FormEntity, name: &str) -> UnregisterFieldResponse {
        UnregisterFieldResponse {
            success: true,
            updated_form: form.unregister_field(name),
            field_name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateFieldResponse {
    pub success: bool,
    pub updated_form: FormEntity,
    pub validation_error: ValidationSignal,
}

/// Sets a field value, optionally validating that single field
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateField {
    pub validate: bool,
}

impl UpdateField {
    pub fn new(validate: bool) -> Self {
        Self { validate }
    }

    pub fn execute(
        &self,
        form: &FormEntity,
        name: &str,
        value: FieldValue,
    ) -> Result<UpdateFieldResponse, FormError> {
        let updated_form = form.set_field_value(name, value)?;
        if !self.validate {
            return Ok(UpdateFieldResponse {
                success: true,
                updated_form,
                validation_error: ValidationSignal::NotValidated,
            });
        }

        let validation = updated_form.validate_field(name)?;
        let updated_form = updated_form.set_field_error(name, validation.error.clone())?;
        Ok(UpdateFieldResponse {
            success: true,
            updated_form,
            validation_error: ValidationSignal::Validated(validation.error),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ValidateFormResponse {
    pub success: bool,
    pub updated_form: FormEntity,
    pub validation_result: FormValidationResult,
    pub is_valid: bool,
}

/// Validates every field and stores the resulting errors
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateForm {
    pub touch_all_fields: bool,
}

impl ValidateForm {
    pub fn new(touch_all_fields: bool) -> Self {
        Self { touch_all_fields }
    }

    pub fn execute(&self, form: &FormEntity) -> Result<ValidateFormResponse, FormError> {
        let mut updated = form.with_status(FormStatus::Validating)?;
        if self.touch_all_fields {
            updated = updated.touch_all_fields();
        }

        let validation_result = updated.validate_all_fields();
        let updated_form = updated
            .with_validation_results(&validation_result)
            .with_status(FormStatus::Idle)?;

        tracing::debug!(
            "Validated {} fields: {} errors",
            updated_form.field_count(),
            validation_result.error_count
        );
        Ok(ValidateFormResponse {
            success: true,
            updated_form,
            is_valid: validation_result.valid,
            validation_result,
        })
    }
}

#[derive(Debug, Clone)]
pub struct FormSubmitResponse {
    pub success: bool,
    pub can_submit: bool,
    pub updated_form: FormEntity,
    /// Field values, empty unless the form can be submitted
    pub form_data: FormData,
    pub validation_errors: BTreeMap<String, String>,
}

/// Counts the attempt, validates with every field touched, and moves a
/// valid form to submitting. Calling the submit handler is left to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleFormSubmit;

impl HandleFormSubmit {
    pub fn execute(&self, form: &FormEntity) -> Result<FormSubmitResponse, FormError> {
        let attempted = form.increment_submit_attempts();
        let validated = ValidateForm::new(true).execute(&attempted)?;

        if !validated.is_valid {
            tracing::debug!(
                "Submit attempt {} blocked by {} invalid fields",
                validated.updated_form.submit_attempts(),
                validated.validation_result.error_count
            );
            return Ok(FormSubmitResponse {
                success: false,
                can_submit: false,
                updated_form: validated.updated_form,
                form_data: FormData::new(),
                validation_errors: validated.validation_result.field_errors,
            });
        }

        let form_data = validated.updated_form.values();
        let updated_form = validated.updated_form.with_status(FormStatus::Submitting)?;
        Ok(FormSubmitResponse {
            success: true,
            can_submit: true,
            updated_form,
            form_data,
            validation_errors: BTreeMap::new(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ResetFormResponse {
    pub success: bool,
    pub updated_form: FormEntity,
}

/// Resets every field, optionally to supplied values
#[derive(Debug, Clone, Copy, Default)]
pub struct ResetForm;

impl ResetForm {
    pub fn execute(
        &self,
        form: &FormEntity,
        values: Option<&HashMap<String, FieldValue>>,
    ) -> ResetFormResponse {
        let updated_form = match values {
            Some(values) => form.reset_with_values(values),
            None => form.reset(),
        };
        ResetFormResponse {
            success: true,
            updated_form,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::REQUIRED_MESSAGE;

    fn register(form: &FormEntity, request: RegisterFieldRequest) -> FormEntity {
        RegisterField.execute(form, request).unwrap().updated_form
    }

    fn email_form() -> FormEntity {
        register(
            &FormEntity::new(),
            RegisterFieldRequest::new("email").required(true),
        )
    }

    mod register_field {
        use super::*;

        #[test]
        fn test_registers_field() {
            let response = RegisterField
                .execute(
                    &FormEntity::new(),
                    RegisterFieldRequest::new("email").initial_value("a@b.co"),
                )
                .unwrap();
            assert!(response.success);
            assert_eq!(response.field_name, "email");
            assert_eq!(
                response.updated_form.field("email").unwrap().value,
                FieldValue::from("a@b.co")
            );
        }

        #[test]
        fn test_rejects_blank_names() {
            for name in ["", "   "] {
                let err = RegisterField
                    .execute(&FormEntity::new(), RegisterFieldRequest::new(name))
                    .unwrap_err();
                assert_eq!(err, FormError::EmptyFieldName);
            }
        }

        #[test]
        fn test_registering_twice_overwrites() {
            let form = register(
                &FormEntity::new(),
                RegisterFieldRequest::new("email").initial_value("one"),
            );
            let form = register(&form, RegisterFieldRequest::new("email").initial_value("two"));
            assert_eq!(form.field_count(), 1);
            assert_eq!(form.field("email").unwrap().value, FieldValue::from("two"));
        }
    }

    mod unregister_field {
        use super::*;

        #[test]
        fn test_unregister() {
            let response = UnregisterField.execute(&email_form(), "email");
            assert!(response.success);
            assert_eq!(response.updated_form.field_count(), 0);
            assert_eq!(UnregisterField.execute(&email_form(), "other").updated_form.field_count(), 1);
        }
    }

    mod update_field {
        use super::*;

        #[test]
        fn test_without_validation_signal_is_absent() {
            let response = UpdateField::new(false)
                .execute(&email_form(), "email", "".into())
                .unwrap();
            assert_eq!(response.validation_error, ValidationSignal::NotValidated);
            assert!(response.updated_form.field("email").unwrap().error.is_none());
        }

        #[test]
        fn test_with_validation_stores_error() {
            let response = UpdateField::new(true)
                .execute(&email_form(), "email", "  ".into())
                .unwrap();
            assert_eq!(
                response.validation_error,
                ValidationSignal::Validated(Some(REQUIRED_MESSAGE.to_string()))
            );
            assert_eq!(
                response.updated_form.field("email").unwrap().error.as_deref(),
                Some(REQUIRED_MESSAGE)
            );
        }

        #[test]
        fn test_with_validation_pass_is_null() {
            let response = UpdateField::new(true)
                .execute(&email_form(), "email", "a@b.co".into())
                .unwrap();
            assert_eq!(response.validation_error, ValidationSignal::Validated(None));
        }

        #[test]
        fn test_unknown_field_fails() {
            let err = UpdateField::new(true)
                .execute(&email_form(), "missing", "x".into())
                .unwrap_err();
            assert_eq!(err, FormError::UnknownField("missing".to_string()));
        }
    }

    mod validate_form {
        use super::*;

        #[test]
        fn test_required_empty_field_with_touch_all() {
            let response = ValidateForm::new(true).execute(&email_form()).unwrap();
            assert!(!response.is_valid);
            assert_eq!(response.validation_result.error_count, 1);

            let field = response.updated_form.field("email").unwrap();
            assert!(field.touched);
            assert_eq!(field.error.as_deref(), Some(REQUIRED_MESSAGE));
            assert_eq!(response.updated_form.status(), FormStatus::Idle);
        }

        #[test]
        fn test_without_touch_all_leaves_fields_untouched() {
            let response = ValidateForm::default().execute(&email_form()).unwrap();
            assert!(!response.updated_form.is_touched());
            assert!(response.updated_form.has_errors());
        }

        #[test]
        fn test_valid_form_clears_stale_errors() {
            let form = email_form()
                .set_field_value("email", "a@b.co".into())
                .unwrap()
                .set_field_error("email", Some("stale".to_string()))
                .unwrap();
            let response = ValidateForm::default().execute(&form).unwrap();
            assert!(response.is_valid);
            assert!(!response.updated_form.has_errors());
        }
    }

    mod handle_form_submit {
        use super::*;

        #[test]
        fn test_invalid_form_cannot_submit() {
            let response = HandleFormSubmit.execute(&email_form()).unwrap();
            assert!(!response.success);
            assert!(!response.can_submit);
            assert!(response.form_data.is_empty());
            assert_eq!(response.updated_form.submit_attempts(), 1);
            assert_eq!(response.validation_errors["email"], REQUIRED_MESSAGE);
            assert_eq!(response.updated_form.status(), FormStatus::Idle);
        }

        #[test]
        fn test_valid_form_moves_to_submitting() {
            let form = email_form().set_field_value("email", "a@b.co".into()).unwrap();
            let response = HandleFormSubmit.execute(&form).unwrap();
            assert!(response.success);
            assert!(response.can_submit);
            assert_eq!(response.form_data["email"], FieldValue::from("a@b.co"));
            assert_eq!(response.updated_form.status(), FormStatus::Submitting);
            assert_eq!(response.updated_form.submit_attempts(), 1);
        }

        #[test]
        fn test_resubmit_after_error_clears_submit_error() {
            let form = email_form()
                .set_field_value("email", "a@b.co".into())
                .unwrap()
                .with_submit_error(Some("Server down".to_string()));
            let response = HandleFormSubmit.execute(&form).unwrap();
            assert!(response.can_submit);
            assert!(response.updated_form.submit_error().is_none());
        }

        #[test]
        fn test_attempts_accumulate() {
            let first = HandleFormSubmit.execute(&email_form()).unwrap();
            let second = HandleFormSubmit.execute(&first.updated_form).unwrap();
            assert_eq!(second.updated_form.submit_attempts(), 2);
        }
    }

    mod reset_form {
        use super::*;

        #[test]
        fn test_reset_without_values() {
            let form = email_form().set_field_value("email", "x".into()).unwrap();
            let response = ResetForm.execute(&form, None);
            assert!(response.success);
            assert_eq!(
                response.updated_form.field("email").unwrap().value,
                FieldValue::empty()
            );
        }

        #[test]
        fn test_reset_with_values() {
            let values = HashMap::from([("email".to_string(), FieldValue::from("seed@b.co"))]);
            let response = ResetForm.execute(&email_form(), Some(&values));
            assert_eq!(
                response.updated_form.field("email").unwrap().value,
                FieldValue::from("seed@b.co")
            );
            assert!(response.updated_form.is_pristine());
        }
    }
}
