//! Reducer for game state transitions

use crate::core::{Action, GameState, WordList};
use rand::Rng;

/// Apply `action` to `state` and return the next state
///
/// `words` and `rng` are only consulted by `Action::Reset`.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_scramble::core::{Action, GameState, WordList, WordPair};
/// use word_scramble::game::transition;
///
/// let words = WordList::new(vec![WordPair::new("ELAPXPME", "example")]).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// let state = GameState::new(WordPair::new("ELAPXPME", "example"));
///
/// let state = transition(&state, Action::SetGuess("Example".into()), &words, &mut rng);
/// let state = transition(&state, Action::CheckAnswer, &words, &mut rng);
/// assert_eq!(state.is_correct, Some(true));
/// assert_eq!(state.attempts, 1);
/// ```
#[must_use]
pub fn transition<R: Rng + ?Sized>(
    state: &GameState,
    action: Action,
    words: &WordList,
    rng: &mut R,
) -> GameState {
    match action {
        Action::SetGuess(text) => GameState {
            user_guess: text,
            ..state.clone()
        },
        Action::CheckAnswer => GameState {
            is_correct: Some(state.word_pair.matches(&state.user_guess)),
            attempts: state.attempts.saturating_add(1),
            ..state.clone()
        },
        Action::Reset => GameState::new(words.choose(rng).clone()),
    }
}
