//! Word Scramble
//!
//! A word-unscrambling game built on a small reducer-style state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{WordList, WordPair};
//! use word_scramble::game::GameEngine;
//!
//! let words = WordList::new(vec![WordPair::new("ELAPXPME", "example")]).unwrap();
//! let mut engine = GameEngine::seeded(&words, 42);
//!
//! engine.set_guess("Example");
//! let state = engine.check_answer();
//! assert_eq!(state.is_correct, Some(true));
//! assert_eq!(state.attempts, 1);
//! ```

// Core domain types
pub mod core;

// State machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
