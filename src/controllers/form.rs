//! Form controller: mutable handle over an immutable form snapshot

use crate::config::ControlConfig;
use crate::error::FormError;
use crate::presenters::{FormPresenter, FormViewModel};
use crate::state::{FieldValue, FormEntity, FormStatus, FormValidationResult};
use crate::use_cases::{
    FormSubmitHandler, HandleFormSubmit, RegisterField, RegisterFieldRequest, ResetForm,
    UnregisterField, UpdateField, ValidateForm, ValidationSignal,
};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

pub const SUBMIT_FAILED_MESSAGE: &str = "Submit handler failed";

/// Result of [`FormController::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the handler was not called
    Invalid(BTreeMap<String, String>),
    /// The handler accepted the data
    Submitted,
    /// The handler failed with this message
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FormController {
    id: Uuid,
    form: FormEntity,
    config: ControlConfig,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(ControlConfig::default())
    }
}

impl FormController {
    pub fn new(config: ControlConfig) -> Self {
        Self::from_form(FormEntity::new(), config)
    }

    pub fn from_form(form: FormEntity, config: ControlConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            form,
            config,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn form(&self) -> &FormEntity {
        &self.form
    }

    pub fn view_model(&self) -> FormViewModel {
        FormPresenter::present(&self.form)
    }

    pub fn register_field(&mut self, request: RegisterFieldRequest) -> Result<(), FormError> {
        self.form = RegisterField.execute(&self.form, request)?.updated_form;
        Ok(())
    }

    pub fn unregister_field(&mut self, name: &str) {
        self.form = UnregisterField.execute(&self.form, name).updated_form;
    }

    pub fn set_field_value(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        self.form = self.form.set_field_value(name, value.into())?;
        Ok(())
    }

    /// Set a value; `validate` falls back to the configured `validate_on_change`
    pub fn update_field(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
        validate: Option<bool>,
    ) -> Result<ValidationSignal, FormError> {
        let validate = validate.unwrap_or(self.config.validate_on_change());
        let response = UpdateField::new(validate).execute(&self.form, name, value.into())?;
        self.form = response.updated_form;
        Ok(response.validation_error)
    }

    pub fn touch_field(&mut self, name: &str) -> Result<(), FormError> {
        self.form = self.form.touch_field(name)?;
        Ok(())
    }

    pub fn set_field_error(&mut self, name: &str, error: Option<String>) -> Result<(), FormError> {
        self.form = self.form.set_field_error(name, error)?;
        Ok(())
    }

    /// Validate every field; `touch_all` falls back to the configured default
    pub fn validate(&mut self, touch_all: Option<bool>) -> Result<FormValidationResult, FormError> {
        let touch_all = touch_all.unwrap_or(self.config.touch_all_on_validate());
        let response = ValidateForm::new(touch_all).execute(&self.form)?;
        self.form = response.updated_form;
        Ok(response.validation_result)
    }

    /// Run the submit protocol and, when the form is valid, hand its data to `handler`
    pub async fn submit(
        &mut self,
        handler: &dyn FormSubmitHandler,
    ) -> Result<SubmitOutcome, FormError> {
        let response = HandleFormSubmit.execute(&self.form)?;
        self.form = response.updated_form;
        if !response.can_submit {
            return Ok(SubmitOutcome::Invalid(response.validation_errors));
        }

        tracing::debug!(
            "Form {} submitting {} fields (attempt {})",
            self.id,
            response.form_data.len(),
            self.form.submit_attempts()
        );
        match handler.on_submit(&response.form_data).await {
            Ok(()) => {
                self.form = self.form.with_status(FormStatus::Success)?;
                Ok(SubmitOutcome::Submitted)
            }
            Err(err) => {
                let message = err.to_string();
                let message = if message.is_empty() {
                    SUBMIT_FAILED_MESSAGE.to_string()
                } else {
                    message
                };
                tracing::warn!("Form {} submit failed: {message}", self.id);
                self.form = self.form.with_submit_error(Some(message.clone()));
                Ok(SubmitOutcome::Failed(message))
            }
        }
    }

    pub fn reset(&mut self, values: Option<&HashMap<String, FieldValue>>) {
        self.form = ResetForm.execute(&self.form, values).updated_form;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::REQUIRED_MESSAGE;
    use crate::use_cases::{submit_handler_fn, MockFormSubmitHandler};
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    fn controller() -> FormController {
        let mut controller = FormController::default();
        controller
            .register_field(RegisterFieldRequest::new("email").required(true))
            .unwrap();
        controller
    }

    #[test]
    fn test_identity_is_stable() {
        let mut controller = controller();
        let id = controller.id();
        controller.set_field_value("email", "a@b.co").unwrap();
        assert_eq!(controller.id(), id);
    }

    #[test]
    fn test_validate_touches_all() {
        let mut controller = controller();
        let result = controller.validate(Some(true)).unwrap();
        assert!(!result.valid);
        let vm = controller.view_model();
        assert!(vm.fields[0].touched);
        assert!(vm.fields[0].show_error);
    }

    #[test]
    fn test_validate_uses_config_default() {
        let config = ControlConfig {
            touch_all_on_validate: Some(true),
            ..Default::default()
        };
        let mut controller = FormController::new(config);
        controller
            .register_field(RegisterFieldRequest::new("email").required(true))
            .unwrap();
        controller.validate(None).unwrap();
        assert!(controller.form().is_touched());
    }

    #[test]
    fn test_update_field_with_config_validation() {
        let config = ControlConfig {
            validate_on_change: Some(true),
            ..Default::default()
        };
        let mut controller = FormController::new(config);
        controller
            .register_field(RegisterFieldRequest::new("email").required(true))
            .unwrap();
        let signal = controller.update_field("email", "", None).unwrap();
        assert_eq!(signal.error(), Some(REQUIRED_MESSAGE));

        let signal = controller.update_field("email", "", Some(false)).unwrap();
        assert_eq!(signal, ValidationSignal::NotValidated);
        assert!(controller.form().field("email").unwrap().error.is_none());
    }

    #[test]
    fn test_update_field_explicit_validation_overrides_config() {
        let mut controller = controller();
        let signal = controller.update_field("email", "  ", Some(true)).unwrap();
        assert_eq!(signal.error(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_unknown_field_propagates() {
        let mut controller = controller();
        assert_eq!(
            controller.touch_field("missing").unwrap_err(),
            FormError::UnknownField("missing".to_string())
        );
    }

    #[tokio::test]
    async fn test_invalid_submit_skips_handler() {
        let mut handler = MockFormSubmitHandler::new();
        handler.expect_on_submit().never();

        let mut controller = controller();
        let outcome = controller.submit(&handler).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Invalid(ref errors) if errors.len() == 1));
        assert_eq!(controller.form().submit_attempts(), 1);
        assert_eq!(controller.form().status(), FormStatus::Idle);
    }

    #[tokio::test]
    async fn test_successful_submit() {
        let mut handler = MockFormSubmitHandler::new();
        handler
            .expect_on_submit()
            .withf(|data| data.get("email") == Some(&FieldValue::from("a@b.co")))
            .times(1)
            .returning(|_| Ok(()));

        let mut controller = controller();
        controller.set_field_value("email", "a@b.co").unwrap();
        let outcome = controller.submit(&handler).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Submitted);
        assert_eq!(controller.form().status(), FormStatus::Success);
    }

    #[tokio::test]
    async fn test_failed_submit_records_error() {
        let handler = submit_handler_fn(|_| async { Err::<(), _>(anyhow!("Server down")) });

        let mut controller = controller();
        controller.set_field_value("email", "a@b.co").unwrap();
        let outcome = controller.submit(&handler).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Failed("Server down".to_string()));
        assert_eq!(controller.form().status(), FormStatus::Error);
        assert_eq!(controller.view_model().submit_error.as_deref(), Some("Server down"));

        let retry = submit_handler_fn(|_| async { Ok::<(), anyhow::Error>(()) });
        assert_eq!(controller.submit(&retry).await.unwrap(), SubmitOutcome::Submitted);
        assert_eq!(controller.form().submit_attempts(), 2);
        assert!(controller.form().submit_error().is_none());
    }

    #[test]
    fn test_reset_and_unregister() {
        let mut controller = controller();
        controller.set_field_value("email", "a@b.co").unwrap();
        controller.reset(None);
        assert!(controller.form().is_pristine());
        controller.unregister_field("email");
        assert_eq!(controller.view_model().field_count, 0);
    }
}
