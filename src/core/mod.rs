//! Core domain types for the word scramble game
//!
//! Plain data with no I/O: word pairs, the word list, game state and actions.

mod action;
mod state;
mod word_list;
mod word_pair;

pub use action::Action;
pub use state::{GameState, Phase};
pub use word_list::{WordList, WordListError};
pub use word_pair::WordPair;
