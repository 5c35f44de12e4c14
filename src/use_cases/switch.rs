//! Switch use-cases: the async toggle protocol and rule-based validation

use super::SwitchChangeHandler;
use crate::state::SwitchEntity;
use std::fmt;
use std::sync::Arc;

pub const NOT_INTERACTIVE_MESSAGE: &str = "Switch is not interactive (disabled or readonly)";
pub const HANDLER_FAILED_MESSAGE: &str = "onChange handler failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchToggleResponse {
    pub success: bool,
    pub updated_switch: SwitchEntity,
    pub old_value: Option<bool>,
    pub new_value: Option<bool>,
    pub error: Option<String>,
}

impl SwitchToggleResponse {
    fn failed(updated_switch: SwitchEntity, error: String) -> Self {
        Self {
            success: false,
            updated_switch,
            old_value: None,
            new_value: None,
            error: Some(error),
        }
    }
}

/// Toggles (or sets) a switch, awaiting the change handler before committing.
///
/// A failing handler rolls the value back. There is no timeout: a handler
/// that never resolves leaves the toggle pending.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleSwitchToggle;

impl HandleSwitchToggle {
    pub async fn execute(
        &self,
        switch: &SwitchEntity,
        new_value: Option<bool>,
        on_change: Option<&dyn SwitchChangeHandler>,
    ) -> SwitchToggleResponse {
        let old_value = switch.value();

        if !switch.is_interactive() {
            tracing::debug!("Toggle rejected: switch is not interactive");
            return SwitchToggleResponse::failed(*switch, NOT_INTERACTIVE_MESSAGE.to_string());
        }

        let target = match new_value {
            Some(value) => switch.with_value(value),
            None => switch.toggle(),
        };

        if let Some(handler) = on_change {
            if let Err(err) = handler.on_change(target.value()).await {
                let message = err.to_string();
                let message = if message.is_empty() {
                    HANDLER_FAILED_MESSAGE.to_string()
                } else {
                    message
                };
                tracing::warn!("onChange handler failed, rolling back to {old_value}: {message}");
                return SwitchToggleResponse::failed(target.with_value(old_value), message);
            }
        }

        SwitchToggleResponse {
            success: true,
            updated_switch: target,
            old_value: Some(old_value),
            new_value: Some(target.value()),
            error: None,
        }
    }
}

/// Caller-supplied switch rule paired with the message reported when it fails
#[derive(Clone)]
pub struct SwitchRule {
    validate: Arc<dyn Fn(&SwitchEntity) -> bool + Send + Sync>,
    pub error_message: String,
}

impl SwitchRule {
    pub fn new<F>(validate: F, error_message: impl Into<String>) -> Self
    where
        F: Fn(&SwitchEntity) -> bool + Send + Sync + 'static,
    {
        Self {
            validate: Arc::new(validate),
            error_message: error_message.into(),
        }
    }

    pub fn check(&self, switch: &SwitchEntity) -> bool {
        (self.validate)(switch)
    }

    pub fn must_be_on(message: Option<&str>) -> Self {
        Self::new(SwitchEntity::is_on, message.unwrap_or("Switch must be on"))
    }

    pub fn must_be_off(message: Option<&str>) -> Self {
        Self::new(SwitchEntity::is_off, message.unwrap_or("Switch must be off"))
    }

    pub fn must_be_interactive(message: Option<&str>) -> Self {
        Self::new(
            SwitchEntity::is_interactive,
            message.unwrap_or("Switch must be interactive"),
        )
    }
}

impl fmt::Debug for SwitchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchRule")
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchValidationResponse {
    pub success: bool,
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Runs caller rules only; every failing rule contributes its message
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateSwitch;

impl ValidateSwitch {
    pub fn execute(&self, switch: &SwitchEntity, rules: &[SwitchRule]) -> SwitchValidationResponse {
        let errors: Vec<String> = rules
            .iter()
            .filter(|rule| !rule.check(switch))
            .map(|rule| rule.error_message.clone())
            .collect();
        SwitchValidationResponse {
            success: true,
            valid: errors.is_empty(),
            errors,
        }
    }
}
