//! Static style tokens consumed by presenters through key lookup

use crate::state::{InputSize, InputStateType, SwitchVariant};
use serde::Serialize;

/// Dimensions for an input size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeTokens {
    pub height: &'static str,
    pub padding: &'static str,
    pub font_size: &'static str,
    pub border_radius: &'static str,
}

/// Colors for an input validation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateTokens {
    pub border_color: &'static str,
    pub focus_ring_color: &'static str,
    pub text_color: &'static str,
    pub message_color: &'static str,
}

/// Track and thumb colors for a switch variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchTokens {
    pub track_on: &'static str,
    pub track_off: &'static str,
    pub thumb: &'static str,
    pub focus_ring_color: &'static str,
}

/// Opacity applied to controls that cannot be interacted with
pub const DISABLED_OPACITY: &str = "0.5";

const SM: SizeTokens = SizeTokens {
    height: "2rem",
    padding: "0.25rem 0.5rem",
    font_size: "0.875rem",
    border_radius: "0.25rem",
};

const MD: SizeTokens = SizeTokens {
    height: "2.5rem",
    padding: "0.5rem 0.75rem",
    font_size: "1rem",
    border_radius: "0.375rem",
};

const LG: SizeTokens = SizeTokens {
    height: "3rem",
    padding: "0.75rem 1rem",
    font_size: "1.125rem",
    border_radius: "0.5rem",
};

const STATE_DEFAULT: StateTokens = StateTokens {
    border_color: "#d1d5db",
    focus_ring_color: "#3b82f6",
    text_color: "#111827",
    message_color: "#6b7280",
};

const STATE_ERROR: StateTokens = StateTokens {
    border_color: "#ef4444",
    focus_ring_color: "#ef4444",
    text_color: "#111827",
    message_color: "#dc2626",
};

const STATE_SUCCESS: StateTokens = StateTokens {
    border_color: "#10b981",
    focus_ring_color: "#10b981",
    text_color: "#111827",
    message_color: "#059669",
};

const SWITCH_DEFAULT: SwitchTokens = SwitchTokens {
    track_on: "#3b82f6",
    track_off: "#d1d5db",
    thumb: "#ffffff",
    focus_ring_color: "#93c5fd",
};

const SWITCH_ERROR: SwitchTokens = SwitchTokens {
    track_on: "#ef4444",
    track_off: "#fca5a5",
    thumb: "#ffffff",
    focus_ring_color: "#fca5a5",
};

pub fn input_size(size: InputSize) -> SizeTokens {
    match size {
        InputSize::Sm => SM,
        InputSize::Md => MD,
        InputSize::Lg => LG,
    }
}

pub fn input_state(state: InputStateType) -> StateTokens {
    match state {
        InputStateType::Default => STATE_DEFAULT,
        InputStateType::Error => STATE_ERROR,
        InputStateType::Success => STATE_SUCCESS,
    }
}

pub fn switch_variant(variant: SwitchVariant) -> SwitchTokens {
    match variant {
        SwitchVariant::Default => SWITCH_DEFAULT,
        SwitchVariant::Error => SWITCH_ERROR,
    }
}
