//! Design tokens for theming
//!
//! Only button colors are modeled; every Forma button-like widget (buttons,
//! icon buttons, menu buttons, button groups) reads its colors from here.

mod button;

pub use button::*;
