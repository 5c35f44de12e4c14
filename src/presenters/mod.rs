//! Presenters: pure entity → view-model mapping
//!
//! Every call builds a fresh view-model; nothing is cached between calls.

mod form;
mod input;
mod switch;
pub mod tokens;

pub use form::{FieldViewModel, FormPresenter, FormViewModel};
pub use input::{InputAria, InputPresenter, InputStyles, InputViewModel};
pub use switch::{SwitchPresenter, SwitchViewModel};
