//! Terminal output formatting
//!
//! Display utilities for CLI results and shared text for both front-ends.

pub mod display;
pub mod formatters;

pub use display::print_word_list;
