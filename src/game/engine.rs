//! Stateful game engine

use super::reducer::transition;
use crate::core::{Action, GameState, Phase, WordList};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Owns one game session
///
/// Borrows the word list, owns the random source, and applies actions through
/// [`transition`]. The initial state is a `Reset` applied once at construction.
pub struct GameEngine<'a, R: Rng = StdRng> {
    words: &'a WordList,
    rng: R,
    state: GameState,
}

impl<'a, R: Rng> GameEngine<'a, R> {
    /// Create an engine drawing words with `rng`
    ///
    /// # Parameters
    /// - `words`: Word pairs to draw rounds from
    /// - `rng`: Random source for word selection
    pub fn new(words: &'a WordList, mut rng: R) -> Self {
        let state = GameState::new(words.choose(&mut rng).clone());
        info!(scrambled = state.word_pair.scrambled(), "Game started");
        Self { words, rng, state }
    }

    /// Apply an action and return the new state
    pub fn dispatch(&mut self, action: Action) -> &GameState {
        debug!(%action, "Dispatching");
        let is_reset = matches!(action, Action::Reset);
        self.state = transition(&self.state, action, self.words, &mut self.rng);

        if is_reset {
            info!(scrambled = self.state.word_pair.scrambled(), "New round");
        } else {
            debug!(
                attempts = self.state.attempts,
                is_correct = ?self.state.is_correct,
                "State updated"
            );
        }
        &self.state
    }

    pub fn set_guess(&mut self, text: impl Into<String>) -> &GameState {
        self.dispatch(Action::SetGuess(text.into()))
    }

    pub fn check_answer(&mut self) -> &GameState {
        self.dispatch(Action::CheckAnswer)
    }

    pub fn reset(&mut self) -> &GameState {
        self.dispatch(Action::Reset)
    }

    #[inline]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[inline]
    pub const fn words(&self) -> &'a WordList {
        self.words
    }
}

impl<'a> GameEngine<'a, StdRng> {
    /// Engine with a deterministic random source
    #[must_use]
    pub fn seeded(words: &'a WordList, seed: u64) -> Self {
        Self::new(words, StdRng::seed_from_u64(seed))
    }

    /// Engine seeded from the operating system
    #[must_use]
    pub fn from_os_rng(words: &'a WordList) -> Self {
        Self::new(words, StdRng::from_os_rng())
    }
}
