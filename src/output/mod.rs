//! Output formatting for calculation results.
//!
//! - [`terminal`] - summary block and aligned table with colors
//! - [`json`] - serde_json rendering for scripting

mod json;
mod terminal;

pub use json::{print_json, to_json};
pub use terminal::{format_field, print_calculation};
