//! Input entity: a single text-like control with format validation

use super::REQUIRED_MESSAGE;
use crate::error::InputError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const URL_MESSAGE: &str = "Please enter a valid URL";
pub const TEL_MESSAGE: &str = "Please enter a valid phone number";
pub const NUMBER_MESSAGE: &str = "Please enter a valid number";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://.+").unwrap());
// ASCII digits only
static TEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").unwrap());
static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]+$").unwrap());

/// Kind of value the input accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Search,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
        }
    }
}

impl FromStr for InputType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "number" => Ok(Self::Number),
            "tel" => Ok(Self::Tel),
            "url" => Ok(Self::Url),
            "search" => Ok(Self::Search),
            other => Err(InputError::UnknownToken {
                kind: "type",
                value: other.to_string(),
            }),
        }
    }
}

/// Control size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl FromStr for InputSize {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            other => Err(InputError::UnknownToken {
                kind: "size",
                value: other.to_string(),
            }),
        }
    }
}

/// Visual validation state of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputStateType {
    #[default]
    Default,
    Error,
    Success,
}

impl InputStateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// Raw state held by an [`InputEntity`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputState {
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub size: InputSize,
    pub state: InputStateType,
    pub value: String,
    pub disabled: bool,
    pub read_only: bool,
    pub required: bool,
    pub error: Option<String>,
}

/// Partial initial state; unset fields take their defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputProps {
    #[serde(rename = "type")]
    pub input_type: Option<InputType>,
    pub size: Option<InputSize>,
    pub state: Option<InputStateType>,
    pub value: Option<String>,
    pub disabled: Option<bool>,
    pub read_only: Option<bool>,
    pub required: Option<bool>,
    pub error: Option<String>,
}

/// Outcome of one input validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValidation {
    pub valid: bool,
    pub error_message: Option<String>,
}

impl InputValidation {
    pub fn passed() -> Self {
        Self {
            valid: true,
            error_message: None,
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            valid: false,
            error_message: Some(message.to_string()),
        }
    }

    fn check(ok: bool, message: &str) -> Self {
        if ok {
            Self::passed()
        } else {
            Self::failed(message)
        }
    }
}

/// Immutable input snapshot, validated on construction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputEntity {
    state: InputState,
}

impl InputEntity {
    /// Create an input from partial props
    pub fn create(props: InputProps) -> Result<Self, InputError> {
        let error = props.error;
        let state = InputState {
            input_type: props.input_type.unwrap_or_default(),
            size: props.size.unwrap_or_default(),
            state: props.state.unwrap_or(if error.is_some() {
                InputStateType::Error
            } else {
                InputStateType::Default
            }),
            value: props.value.unwrap_or_default(),
            disabled: props.disabled.unwrap_or(false),
            read_only: props.read_only.unwrap_or(false),
            required: props.required.unwrap_or(false),
            error,
        };
        Self::from_state(state)
    }

    /// Build an input from full state, checking every invariant
    pub fn from_state(state: InputState) -> Result<Self, InputError> {
        if state.read_only && state.required {
            return Err(InputError::ReadOnlyRequired);
        }
        if state.disabled && state.error.is_some() {
            return Err(InputError::DisabledWithError);
        }
        if state.error.is_some() && state.state != InputStateType::Error {
            return Err(InputError::ErrorWithoutErrorState);
        }
        Ok(Self { state })
    }

    /// Transitions whose result satisfies the invariants by construction
    fn rebuild(state: InputState) -> Self {
        debug_assert!(Self::from_state(state.clone()).is_ok());
        Self { state }
    }

    pub fn current_state(&self) -> &InputState {
        &self.state
    }

    pub fn input_type(&self) -> InputType {
        self.state.input_type
    }

    pub fn size(&self) -> InputSize {
        self.state.size
    }

    pub fn state_type(&self) -> InputStateType {
        self.state.state
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }

    pub fn is_read_only(&self) -> bool {
        self.state.read_only
    }

    pub fn is_required(&self) -> bool {
        self.state.required
    }

    pub fn is_interactive(&self) -> bool {
        !self.state.disabled && !self.state.read_only
    }

    /// Error-state counts even without a message
    pub fn has_error(&self) -> bool {
        self.state.error.is_some() || self.state.state == InputStateType::Error
    }

    pub fn is_success(&self) -> bool {
        self.state.state == InputStateType::Success
    }

    pub fn is_empty(&self) -> bool {
        self.state.value.is_empty()
    }

    // Transitions

    /// Replace the value. Clears any error; an error state reverts to default.
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        let mut state = self.state.clone();
        state.value = value.into();
        state.error = None;
        if state.state == InputStateType::Error {
            state.state = InputStateType::Default;
        }
        Self::rebuild(state)
    }

    /// `Some` enters error state; `None` clears it back to default, success included.
    pub fn with_error(&self, error: Option<String>) -> Result<Self, InputError> {
        let mut state = self.state.clone();
        state.state = if error.is_some() {
            InputStateType::Error
        } else {
            InputStateType::Default
        };
        state.error = error;
        Self::from_state(state)
    }

    /// Error keeps the current message; any other state clears it.
    pub fn with_state_type(&self, state_type: InputStateType) -> Self {
        let mut state = self.state.clone();
        state.state = state_type;
        if state_type != InputStateType::Error {
            state.error = None;
        }
        Self::rebuild(state)
    }

    pub fn with_disabled(&self, disabled: bool) -> Self {
        let mut state = self.state.clone();
        state.disabled = disabled;
        if disabled {
            state.error = None;
            state.state = InputStateType::Default;
        }
        Self::rebuild(state)
    }

    pub fn with_read_only(&self, read_only: bool) -> Self {
        let mut state = self.state.clone();
        state.read_only = read_only;
        if read_only {
            state.required = false;
        }
        Self::rebuild(state)
    }

    pub fn with_required(&self, required: bool) -> Self {
        let mut state = self.state.clone();
        state.required = required;
        if required {
            state.read_only = false;
        }
        Self::rebuild(state)
    }

    pub fn with_type(&self, input_type: InputType) -> Self {
        let mut state = self.state.clone();
        state.input_type = input_type;
        Self::rebuild(state)
    }

    pub fn with_size(&self, size: InputSize) -> Self {
        let mut state = self.state.clone();
        state.size = size;
        Self::rebuild(state)
    }

    // Validation

    pub fn validate_required(&self) -> InputValidation {
        InputValidation::check(
            !(self.state.required && self.state.value.trim().is_empty()),
            REQUIRED_MESSAGE,
        )
    }

    /// Runs `pattern` only when the type matches and there is a value
    fn validate_format(&self, input_type: InputType, pattern: &Regex, message: &str) -> InputValidation {
        if self.state.input_type != input_type || self.state.value.is_empty() {
            return InputValidation::passed();
        }
        InputValidation::check(pattern.is_match(&self.state.value), message)
    }

    pub fn validate_email(&self) -> InputValidation {
        self.validate_format(InputType::Email, &EMAIL_REGEX, EMAIL_MESSAGE)
    }

    pub fn validate_url(&self) -> InputValidation {
        self.validate_format(InputType::Url, &URL_REGEX, URL_MESSAGE)
    }

    pub fn validate_tel(&self) -> InputValidation {
        self.validate_format(InputType::Tel, &TEL_REGEX, TEL_MESSAGE)
    }

    pub fn validate_number(&self) -> InputValidation {
        self.validate_format(InputType::Number, &NUMBER_REGEX, NUMBER_MESSAGE)
    }

    /// Required first, then the single validator matching the input type
    pub fn validate_all(&self) -> InputValidation {
        let required = self.validate_required();
        if !required.valid {
            return required;
        }
        match self.state.input_type {
            InputType::Email => self.validate_email(),
            InputType::Url => self.validate_url(),
            InputType::Tel => self.validate_tel(),
            InputType::Number => self.validate_number(),
            InputType::Text | InputType::Password | InputType::Search => {
                InputValidation::passed()
            }
        }
    }
}
