//! Input controller: mutable handle over an immutable input snapshot

use crate::config::ControlConfig;
use crate::error::InputError;
use crate::presenters::{InputPresenter, InputViewModel};
use crate::state::{InputEntity, InputProps, InputSize, InputStateType, InputType, InputValidation};
use crate::use_cases::{HandleInputBlur, HandleInputChange, ValidateInput, ValidationSignal};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct InputController {
    id: Uuid,
    input: InputEntity,
    /// Set once the value has changed through [`change`](Self::change)
    dirty: bool,
    /// Set once the input has lost focus
    touched: bool,
    config: ControlConfig,
}

impl InputController {
    pub fn new(props: InputProps, config: ControlConfig) -> Result<Self, InputError> {
        Ok(Self::from_input(InputEntity::create(props)?, config))
    }

    pub fn from_input(input: InputEntity, config: ControlConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            input,
            dirty: false,
            touched: false,
            config,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn input(&self) -> &InputEntity {
        &self.input
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn view_model(&self) -> InputViewModel {
        InputPresenter::present(&self.input)
    }

    /// Apply a user edit; non-interactive inputs ignore it
    pub fn change(&mut self, value: impl Into<String>) -> Result<ValidationSignal, InputError> {
        let response = HandleInputChange::new(self.config.validate_on_change())
            .execute(&self.input, value)?;
        if response.updated_input.value() != self.input.value() {
            self.dirty = true;
        }
        self.input = response.updated_input;
        Ok(response.validation_error)
    }

    /// Mark the input touched, validating when configured to
    pub fn blur(&mut self) -> Result<Option<InputValidation>, InputError> {
        self.touched = true;
        let response = HandleInputBlur::new(self.config.validate_on_blur()).execute(&self.input)?;
        self.input = response.updated_input;
        Ok(response.validation_result)
    }

    pub fn validate(&mut self) -> Result<InputValidation, InputError> {
        let response = ValidateInput.execute(&self.input)?;
        tracing::trace!("Input {} validated: {}", self.id, response.validation_result.valid);
        self.input = response.updated_input;
        Ok(response.validation_result)
    }

    pub fn set_error(&mut self, error: Option<String>) -> Result<(), InputError> {
        self.input = self.input.with_error(error)?;
        Ok(())
    }

    pub fn set_state_type(&mut self, state: InputStateType) {
        self.input = self.input.with_state_type(state);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.input = self.input.with_disabled(disabled);
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.input = self.input.with_read_only(read_only);
    }

    pub fn set_required(&mut self, required: bool) {
        self.input = self.input.with_required(required);
    }

    pub fn set_type(&mut self, input_type: InputType) {
        self.input = self.input.with_type(input_type);
    }

    pub fn set_size(&mut self, size: InputSize) {
        self.input = self.input.with_size(size);
    }

    /// Return to `props`, clearing the dirty and touched flags
    pub fn reset(&mut self, props: InputProps) -> Result<(), InputError> {
        self.input = InputEntity::create(props)?;
        self.dirty = false;
        self.touched = false;
        Ok(())
    }
}
