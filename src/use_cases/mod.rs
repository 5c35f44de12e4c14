//! Use-cases: stateless operations over entity snapshots
//!
//! Each use-case takes the current entity plus request parameters and
//! returns a response carrying the updated entity. Business validation
//! failures are reported as data; only invariant violations are errors.

mod form;
mod input;
mod switch;
mod traits;

pub use form::*;
pub use input::*;
pub use switch::*;
pub use traits::*;

/// Whether validation ran, and if so what it found.
///
/// Keeps "not validated" distinct from "validated and passed".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationSignal {
    #[default]
    NotValidated,
    Validated(Option<String>),
}

impl ValidationSignal {
    pub fn was_validated(&self) -> bool {
        matches!(self, Self::Validated(_))
    }

    /// The failure message, if validation ran and failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Validated(Some(message)) => Some(message),
            _ => None,
        }
    }
}
