//! Controllers: stateful façades for binding layers
//!
//! Each controller owns one entity snapshot and replaces it wholesale with
//! the result of every operation.

mod form;
mod input;
mod switch;

pub use form::{FormController, SubmitOutcome, SUBMIT_FAILED_MESSAGE};
pub use input::InputController;
pub use switch::SwitchController;
