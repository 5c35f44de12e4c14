//! Input use-cases: change, validate and blur protocols

use super::ValidationSignal;
use crate::error::InputError;
use crate::state::{InputEntity, InputValidation};

#[derive(Debug, Clone)]
pub struct InputChangeResponse {
    pub success: bool,
    pub updated_input: InputEntity,
    pub validation_error: ValidationSignal,
}

/// Applies a new value; ignored when the input is not interactive
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleInputChange {
    pub validate_on_change: bool,
}

impl HandleInputChange {
    pub fn new(validate_on_change: bool) -> Self {
        Self { validate_on_change }
    }

    pub fn execute(
        &self,
        input: &InputEntity,
        new_value: impl Into<String>,
    ) -> Result<InputChangeResponse, InputError> {
        if !input.is_interactive() {
            tracing::trace!("Ignoring change on non-interactive input");
            return Ok(InputChangeResponse {
                success: true,
                updated_input: input.clone(),
                validation_error: ValidationSignal::NotValidated,
            });
        }

        let updated = input.with_value(new_value);
        if !self.validate_on_change {
            return Ok(InputChangeResponse {
                success: true,
                updated_input: updated,
                validation_error: ValidationSignal::NotValidated,
            });
        }

        let result = updated.validate_all();
        let updated_input = match &result.error_message {
            Some(message) if !result.valid => updated.with_error(Some(message.clone()))?,
            _ => updated,
        };
        Ok(InputChangeResponse {
            success: true,
            updated_input,
            validation_error: ValidationSignal::Validated(result.error_message),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ValidateInputResponse {
    pub success: bool,
    pub updated_input: InputEntity,
    pub validation_result: InputValidation,
}

/// Runs every applicable validator and stores the outcome.
///
/// A passing result goes through `with_error(None)`, which also drops a
/// success state back to default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateInput;

impl ValidateInput {
    pub fn execute(&self, input: &InputEntity) -> Result<ValidateInputResponse, InputError> {
        let validation_result = input.validate_all();
        let error = if validation_result.valid {
            None
        } else {
            validation_result.error_message.clone()
        };
        let updated_input = input.with_error(error)?;
        tracing::trace!("Validated input: valid={}", validation_result.valid);
        Ok(ValidateInputResponse {
            success: true,
            updated_input,
            validation_result,
        })
    }
}

#[derive(Debug, Clone)]
pub struct InputBlurResponse {
    pub success: bool,
    pub updated_input: InputEntity,
    /// Present only when the blur triggered validation
    pub validation_result: Option<InputValidation>,
}

/// Optionally validates when the input loses focus
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleInputBlur {
    pub validate_on_blur: bool,
}

impl HandleInputBlur {
    pub fn new(validate_on_blur: bool) -> Self {
        Self { validate_on_blur }
    }

    pub fn execute(&self, input: &InputEntity) -> Result<InputBlurResponse, InputError> {
        if !self.validate_on_blur || !input.is_interactive() {
            return Ok(InputBlurResponse {
                success: true,
                updated_input: input.clone(),
                validation_result: None,
            });
        }
        let validated = ValidateInput.execute(input)?;
        Ok(InputBlurResponse {
            success: true,
            updated_input: validated.updated_input,
            validation_result: Some(validated.validation_result),
        })
    }
}
