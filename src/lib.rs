//! Control State - state, validation and view-model core for form, input
//! and switch controls
//!
//! Entities are immutable snapshots that enforce their invariants on
//! construction. Use-cases run the multi-step protocols (validate, submit,
//! toggle) over them, presenters derive serializable view-models, and
//! controllers give binding layers a mutable handle over the current
//! snapshot.

pub mod config;
pub mod controllers;
pub mod error;
pub mod presenters;
pub mod state;
pub mod use_cases;

pub use config::ControlConfig;
pub use controllers::{FormController, InputController, SubmitOutcome, SwitchController};
pub use error::{ControlError, FormError, InputError, SwitchError};
