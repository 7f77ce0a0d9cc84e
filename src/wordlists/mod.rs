//! Word lists for the scramble game
//!
//! Provides the built-in list compiled into the binary and a loader for custom files.

mod embedded;
pub mod loader;

pub use embedded::{WORD_PAIRS, WORD_PAIRS_COUNT};

use crate::core::WordList;

/// The built-in word list
///
/// # Panics
/// Never in practice: the build script embeds a non-empty list, which the tests check.
#[must_use]
pub fn builtin() -> WordList {
    WordList::new(loader::pairs_from_slice(WORD_PAIRS)).expect("embedded word list is non-empty")
}
