//! Game state for a single session

use super::WordPair;

/// Which half of a round the player is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No check has happened since the last reset
    Guessing,
    /// At least one check has happened; holds the latest result
    Checked { correct: bool },
}

/// Snapshot of one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub word_pair: WordPair,
    pub user_guess: String,
    /// `None` until the first check of the round
    pub is_correct: Option<bool>,
    pub attempts: u32,
}

impl GameState {
    /// Fresh round state for `word_pair`
    #[must_use]
    pub const fn new(word_pair: WordPair) -> Self {
        Self {
            word_pair,
            user_guess: String::new(),
            is_correct: None,
            attempts: 0,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.is_correct {
            None => Phase::Guessing,
            Some(correct) => Phase::Checked { correct },
        }
    }

    /// True once the latest check matched the answer
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_correct == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_guessing() {
        let state = GameState::new(WordPair::new("ELAPXPME", "example"));
        assert_eq!(state.phase(), Phase::Guessing);
        assert_eq!(state.user_guess, "");
        assert_eq!(state.attempts, 0);
        assert!(!state.is_solved());
    }

    #[test]
    fn phase_follows_is_correct() {
        let mut state = GameState::new(WordPair::new("ELAPXPME", "example"));
        state.is_correct = Some(false);
        assert_eq!(state.phase(), Phase::Checked { correct: false });
        assert!(!state.is_solved());

        state.is_correct = Some(true);
        assert_eq!(state.phase(), Phase::Checked { correct: true });
        assert!(state.is_solved());
    }
}
