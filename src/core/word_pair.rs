//! Scrambled/correct word pairing
//!
//! A `WordPair` is what the player sees (`scrambled`) and what they must type (`correct`).

use rustc_hash::FxHashMap;
use std::fmt;

/// A scrambled word and the answer it unscrambles to
///
/// The scramble is expected to be a permutation of the answer's letters, but
/// nothing enforces it. Use [`WordPair::is_permutation`] to check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPair {
    scrambled: String,
    correct: String,
}

impl WordPair {
    /// Create a new pair
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::WordPair;
    ///
    /// let pair = WordPair::new("ELAPXPME", "example");
    /// assert_eq!(pair.scrambled(), "ELAPXPME");
    /// assert_eq!(pair.correct(), "example");
    /// ```
    #[must_use]
    pub fn new(scrambled: impl Into<String>, correct: impl Into<String>) -> Self {
        Self {
            scrambled: scrambled.into(),
            correct: correct.into(),
        }
    }

    /// The letters shown to the player
    #[inline]
    #[must_use]
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    /// The answer
    #[inline]
    #[must_use]
    pub fn correct(&self) -> &str {
        &self.correct
    }

    /// Check a guess against the answer
    ///
    /// Case-insensitive only. No trimming and no Unicode normalization.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::WordPair;
    ///
    /// let pair = WordPair::new("ELAPXPME", "example");
    /// assert!(pair.matches("ExAmPlE"));
    /// assert!(!pair.matches(" example"));
    /// ```
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        guess.to_lowercase() == self.correct.to_lowercase()
    }

    /// Whether `scrambled` uses exactly the letters of `correct`, ignoring case
    #[must_use]
    pub fn is_permutation(&self) -> bool {
        letter_counts(&self.scrambled) == letter_counts(&self.correct)
    }
}

fn letter_counts(text: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in text.chars().flat_map(char::to_lowercase) {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.scrambled, self.correct)
    }
}
