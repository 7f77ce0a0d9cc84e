//! Non-empty list of word pairs
//!
//! The engine draws every round from a `WordList`, so emptiness is rejected up front.

use super::WordPair;
use rand::Rng;
use std::fmt;
use std::io;

/// An ordered, read-only, non-empty list of word pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    pairs: Vec<WordPair>,
}

/// Error type for building or loading word lists
#[derive(Debug)]
pub enum WordListError {
    Empty,
    Malformed { line: usize, content: String },
    Io(io::Error),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list must contain at least one pair"),
            Self::Malformed { line, content } => {
                write!(
                    f,
                    "Line {line}: expected 'SCRAMBLED,correct', got '{content}'"
                )
            }
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl WordList {
    /// Build a list from pairs
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `pairs` is empty.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{WordList, WordPair};
    ///
    /// let list = WordList::new(vec![WordPair::new("ELPMAXE", "example")]).unwrap();
    /// assert_eq!(list.len(), 1);
    ///
    /// assert!(WordList::new(Vec::new()).is_err());
    /// ```
    pub fn new(pairs: Vec<WordPair>) -> Result<Self, WordListError> {
        if pairs.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { pairs })
    }

    /// Pick a pair uniformly at random
    ///
    /// Consecutive picks may repeat.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &WordPair {
        &self.pairs[rng.random_range(0..self.pairs.len())]
    }

    #[must_use]
    pub fn contains(&self, pair: &WordPair) -> bool {
        self.pairs.contains(pair)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordPair> {
        self.pairs.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[WordPair] {
        &self.pairs
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a WordPair;
    type IntoIter = std::slice::Iter<'a, WordPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn three_pairs() -> WordList {
        WordList::new(vec![
            WordPair::new("ELPMAXE", "example"),
            WordPair::new("ELBMARCS", "scramble"),
            WordPair::new("RETCARAHC", "character"),
        ])
        .unwrap()
    }

    #[test]
    fn empty_list_rejected() {
        assert!(matches!(WordList::new(vec![]), Err(WordListError::Empty)));
    }

    #[test]
    fn choose_returns_member() {
        let list = three_pairs();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pair = list.choose(&mut rng);
            assert!(list.contains(pair));
        }
    }

    #[test]
    fn choose_single_pair_always_same() {
        let list = WordList::new(vec![WordPair::new("ELPMAXE", "example")]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10 {
            assert_eq!(list.choose(&mut rng).correct(), "example");
        }
    }

    #[test]
    fn choose_reaches_every_index() {
        let list = three_pairs();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let pair = list.choose(&mut rng);
            let idx = list.iter().position(|p| p == pair).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "Uniform pick never hit some index");
    }

    #[test]
    fn choose_is_deterministic_for_seed() {
        let list = three_pairs();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(list.choose(&mut a), list.choose(&mut b));
        }
    }

    #[test]
    fn malformed_error_message() {
        let err = WordListError::Malformed {
            line: 3,
            content: "nocomma".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Line 3: expected 'SCRAMBLED,correct', got 'nocomma'"
        );
    }
}
