//! Switch presenter

use super::tokens::{self, SwitchTokens, DISABLED_OPACITY};
use crate::state::{SwitchEntity, SwitchVariant};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchViewModel {
    pub checked: bool,
    pub variant: SwitchVariant,
    pub disabled: bool,
    pub readonly: bool,
    pub is_interactive: bool,
    pub role: &'static str,
    pub aria_checked: &'static str,
    pub aria_disabled: bool,
    pub aria_readonly: bool,
    pub colors: SwitchTokens,
    /// Track color for the current value
    pub track_color: &'static str,
    pub opacity: &'static str,
}

pub struct SwitchPresenter;

impl SwitchPresenter {
    pub fn present(switch: &SwitchEntity) -> SwitchViewModel {
        let colors = tokens::switch_variant(switch.variant());
        SwitchViewModel {
            checked: switch.is_on(),
            variant: switch.variant(),
            disabled: switch.is_disabled(),
            readonly: switch.is_readonly(),
            is_interactive: switch.is_interactive(),
            role: "switch",
            aria_checked: if switch.is_on() { "true" } else { "false" },
            aria_disabled: switch.is_disabled(),
            aria_readonly: switch.is_readonly(),
            track_color: if switch.is_on() {
                colors.track_on
            } else {
                colors.track_off
            },
            colors,
            opacity: if switch.is_interactive() {
                "1"
            } else {
                DISABLED_OPACITY
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SwitchProps;

    #[test]
    fn test_off_switch() {
        let vm = SwitchPresenter::present(&SwitchEntity::default());
        assert!(!vm.checked);
        assert_eq!(vm.role, "switch");
        assert_eq!(vm.aria_checked, "false");
        assert_eq!(vm.track_color, "#d1d5db");
        assert_eq!(vm.opacity, "1");
    }

    #[test]
    fn test_on_error_switch() {
        let switch = SwitchEntity::create(SwitchProps {
            value: Some(true),
            variant: Some(SwitchVariant::Error),
            ..Default::default()
        })
        .unwrap();
        let vm = SwitchPresenter::present(&switch);
        assert_eq!(vm.aria_checked, "true");
        assert_eq!(vm.track_color, "#ef4444");
    }

    #[test]
    fn test_readonly_switch() {
        let vm = SwitchPresenter::present(&SwitchEntity::default().with_readonly(true));
        assert!(vm.aria_readonly);
        assert!(!vm.aria_disabled);
        assert!(!vm.is_interactive);
        assert_eq!(vm.opacity, DISABLED_OPACITY);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(SwitchPresenter::present(&SwitchEntity::default())).unwrap();
        assert_eq!(json["ariaChecked"], "false");
        assert_eq!(json["variant"], "default");
        assert_eq!(json["colors"]["trackOn"], "#3b82f6");
    }
}
