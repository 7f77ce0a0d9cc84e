//! Game engine
//!
//! A pure reducer over `(state, action)` plus an engine that owns the state and RNG.

mod engine;
mod reducer;
mod stats;

pub use engine::GameEngine;
pub use reducer::transition;
pub use stats::SessionStats;
