//! Entity layer: immutable control snapshots and their invariants

mod forms;
mod input;
mod switch;

pub use forms::*;
pub use input::*;
pub use switch::*;

/// Message reported by every required-value check
pub const REQUIRED_MESSAGE: &str = "This field is required";
