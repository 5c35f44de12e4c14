//! Switch entity: a boolean control with disabled/readonly exclusivity

use crate::error::SwitchError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Visual variant of the switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchVariant {
    #[default]
    Default,
    Error,
}

impl SwitchVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Error => "error",
        }
    }
}

impl FromStr for SwitchVariant {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "error" => Ok(Self::Error),
            other => Err(SwitchError::UnknownVariant(other.to_string())),
        }
    }
}

/// Raw state held by a [`SwitchEntity`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SwitchState {
    pub value: bool,
    pub variant: SwitchVariant,
    pub disabled: bool,
    pub readonly: bool,
}

/// Partial initial state; unset fields take their defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchProps {
    pub value: Option<bool>,
    pub variant: Option<SwitchVariant>,
    pub disabled: Option<bool>,
    pub readonly: Option<bool>,
}

impl SwitchProps {
    /// Read props from loosely typed JSON. A present `value` must be a JSON boolean.
    pub fn from_json(json: &Value) -> Result<Self, SwitchError> {
        let flag = |key: &str| -> Result<Option<bool>, SwitchError> {
            match json.get(key) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::Bool(b)) => Ok(Some(*b)),
                Some(_) => Err(SwitchError::NonBooleanValue),
            }
        };
        let variant = match json.get("variant") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.parse()?),
            Some(other) => return Err(SwitchError::UnknownVariant(other.to_string())),
        };
        Ok(Self {
            value: flag("value")?,
            variant,
            disabled: flag("disabled")?,
            readonly: flag("readonly")?,
        })
    }
}

/// Immutable switch snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchEntity {
    state: SwitchState,
}

impl SwitchEntity {
    pub fn create(props: SwitchProps) -> Result<Self, SwitchError> {
        Self::from_state(SwitchState {
            value: props.value.unwrap_or(false),
            variant: props.variant.unwrap_or_default(),
            disabled: props.disabled.unwrap_or(false),
            readonly: props.readonly.unwrap_or(false),
        })
    }

    pub fn from_state(state: SwitchState) -> Result<Self, SwitchError> {
        if state.disabled && state.readonly {
            return Err(SwitchError::DisabledAndReadonly);
        }
        Ok(Self { state })
    }

    pub fn current_state(&self) -> SwitchState {
        self.state
    }

    pub fn value(&self) -> bool {
        self.state.value
    }

    pub fn variant(&self) -> SwitchVariant {
        self.state.variant
    }

    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }

    pub fn is_readonly(&self) -> bool {
        self.state.readonly
    }

    pub fn is_on(&self) -> bool {
        self.state.value
    }

    pub fn is_off(&self) -> bool {
        !self.state.value
    }

    pub fn is_interactive(&self) -> bool {
        !self.state.disabled && !self.state.readonly
    }

    pub fn with_value(&self, value: bool) -> Self {
        Self {
            state: SwitchState { value, ..self.state },
        }
    }

    pub fn toggle(&self) -> Self {
        self.with_value(!self.state.value)
    }

    pub fn with_variant(&self, variant: SwitchVariant) -> Self {
        Self {
            state: SwitchState {
                variant,
                ..self.state
            },
        }
    }

    /// Disabling forces readonly off
    pub fn with_disabled(&self, disabled: bool) -> Self {
        Self {
            state: SwitchState {
                disabled,
                readonly: if disabled { false } else { self.state.readonly },
                ..self.state
            },
        }
    }

    /// Readonly forces disabled off
    pub fn with_readonly(&self, readonly: bool) -> Self {
        Self {
            state: SwitchState {
                readonly,
                disabled: if readonly { false } else { self.state.disabled },
                ..self.state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn switch(value: bool) -> SwitchEntity {
        SwitchEntity::create(SwitchProps {
            value: Some(value),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let s = SwitchEntity::create(SwitchProps::default()).unwrap();
        assert!(s.is_off());
        assert_eq!(s.variant(), SwitchVariant::Default);
        assert!(s.is_interactive());
    }

    #[test]
    fn test_disabled_and_readonly_rejected() {
        let result = SwitchEntity::create(SwitchProps {
            disabled: Some(true),
            readonly: Some(true),
            ..Default::default()
        });
        assert_eq!(result.unwrap_err(), SwitchError::DisabledAndReadonly);
    }

    #[test]
    fn test_double_toggle_restores_value() {
        for value in [true, false] {
            let s = switch(value);
            assert_eq!(s.toggle().toggle().current_state().value, s.current_state().value);
            assert_eq!(s.toggle().value(), !value);
        }
    }

    #[test]
    fn test_disabled_forces_readonly_off() {
        let s = switch(false).with_readonly(true).with_disabled(true);
        assert!(s.is_disabled());
        assert!(!s.current_state().readonly);
    }

    #[test]
    fn test_readonly_forces_disabled_off() {
        let s = switch(false).with_disabled(true).with_readonly(true);
        assert!(s.is_readonly());
        assert!(!s.current_state().disabled);
    }

    #[test]
    fn test_clearing_a_flag_keeps_the_other() {
        let s = switch(false).with_readonly(true).with_disabled(false);
        assert!(s.is_readonly());
        assert!(!s.is_interactive());
    }

    #[test]
    fn test_with_variant() {
        let s = switch(true).with_variant(SwitchVariant::Error);
        assert_eq!(s.variant(), SwitchVariant::Error);
        assert!(s.is_on());
    }

    #[test]
    fn test_props_from_json() {
        let props = SwitchProps::from_json(&json!({"value": true, "variant": "error"})).unwrap();
        let s = SwitchEntity::create(props).unwrap();
        assert!(s.is_on());
        assert_eq!(s.variant(), SwitchVariant::Error);
    }

    #[test]
    fn test_non_boolean_value_rejected() {
        assert_eq!(
            SwitchProps::from_json(&json!({"value": "yes"})).unwrap_err(),
            SwitchError::NonBooleanValue
        );
        assert_eq!(
            SwitchProps::from_json(&json!({"value": 1})).unwrap_err(),
            SwitchError::NonBooleanValue
        );
    }

    #[test]
    fn test_unknown_variant_rejected() {
        assert_eq!(
            SwitchProps::from_json(&json!({"variant": "warning"})).unwrap_err(),
            SwitchError::UnknownVariant("warning".to_string())
        );
        assert_eq!(
            SwitchProps::from_json(&json!({"variant": 5})).unwrap_err(),
            SwitchError::UnknownVariant("5".to_string())
        );
        assert_eq!(
            SwitchProps::from_json(&json!({"variant": null})).unwrap().variant,
            None
        );
    }
}
