//! Input presenter

use super::tokens::{self, SizeTokens, StateTokens, DISABLED_OPACITY};
use crate::state::{InputEntity, InputSize, InputStateType, InputType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputStyles {
    pub size: SizeTokens,
    pub state: StateTokens,
    pub opacity: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputAria {
    pub aria_invalid: bool,
    pub aria_required: bool,
    pub aria_disabled: bool,
    pub aria_readonly: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputViewModel {
    #[serde(rename = "type")]
    pub input_type: InputType,
    /// HTML `type` attribute value
    pub html_type: &'static str,
    pub size: InputSize,
    pub state: InputStateType,
    pub value: String,
    pub disabled: bool,
    pub read_only: bool,
    pub required: bool,
    pub error_message: Option<String>,
    pub has_error: bool,
    pub is_interactive: bool,
    pub styles: InputStyles,
    pub aria: InputAria,
}

pub struct InputPresenter;

impl InputPresenter {
    pub fn present(input: &InputEntity) -> InputViewModel {
        let state = input.current_state();
        InputViewModel {
            input_type: state.input_type,
            html_type: state.input_type.as_str(),
            size: state.size,
            state: state.state,
            value: state.value.clone(),
            disabled: state.disabled,
            read_only: state.read_only,
            required: state.required,
            error_message: state.error.clone(),
            has_error: input.has_error(),
            is_interactive: input.is_interactive(),
            styles: InputStyles {
                size: tokens::input_size(state.size),
                state: tokens::input_state(state.state),
                opacity: if state.disabled { DISABLED_OPACITY } else { "1" },
            },
            aria: InputAria {
                aria_invalid: input.has_error(),
                aria_required: state.required,
                aria_disabled: state.disabled,
                aria_readonly: state.read_only,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InputProps;

    #[test]
    fn test_default_input() {
        let vm = InputPresenter::present(&InputEntity::default());
        assert_eq!(vm.html_type, "text");
        assert_eq!(vm.styles.size.height, "2.5rem");
        assert_eq!(vm.styles.state.border_color, "#d1d5db");
        assert!(!vm.aria.aria_invalid);
        assert!(vm.is_interactive);
    }

    #[test]
    fn test_error_input() {
        let input = InputEntity::create(InputProps {
            input_type: Some(InputType::Email),
            size: Some(InputSize::Lg),
            required: Some(true),
            ..Default::default()
        })
        .unwrap()
        .with_error(Some("Please enter a valid email address".to_string()))
        .unwrap();

        let vm = InputPresenter::present(&input);
        assert!(vm.has_error);
        assert!(vm.aria.aria_invalid);
        assert!(vm.aria.aria_required);
        assert_eq!(vm.styles.state.border_color, "#ef4444");
        assert_eq!(vm.styles.size.font_size, "1.125rem");
        assert_eq!(
            vm.error_message.as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_disabled_input_is_dimmed() {
        let vm = InputPresenter::present(&InputEntity::default().with_disabled(true));
        assert_eq!(vm.styles.opacity, DISABLED_OPACITY);
        assert!(vm.aria.aria_disabled);
        assert!(!vm.is_interactive);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(InputPresenter::present(&InputEntity::default())).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["readOnly"], false);
        assert_eq!(json["aria"]["ariaInvalid"], false);
        assert_eq!(json["styles"]["size"]["fontSize"], "1rem");
    }

    #[test]
    fn test_each_call_is_fresh() {
        let input = InputEntity::default();
        let mut first = InputPresenter::present(&input);
        first.value.push_str("changed");
        assert_eq!(InputPresenter::present(&input).value, "");
    }
}
