//! In-memory session statistics
//!
//! Counters live only as long as the session; nothing is persisted.

use crate::core::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: usize,
    pub words_solved: usize,
    pub total_attempts: u64,
    round_solved: bool,
}

impl SessionStats {
    /// Counters for a session whose first round is already underway
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rounds_played: 1,
            words_solved: 0,
            total_attempts: 0,
            round_solved: false,
        }
    }

    /// Record the state right after a check
    ///
    /// A round counts as solved once, however many correct checks follow.
    pub fn record_check(&mut self, state: &GameState) {
        self.total_attempts += 1;
        if state.is_solved() && !self.round_solved {
            self.round_solved = true;
            self.words_solved += 1;
        }
    }

    pub fn record_reset(&mut self) {
        self.rounds_played += 1;
        self.round_solved = false;
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
