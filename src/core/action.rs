//! Actions accepted by the game reducer

use std::fmt;

/// Every input the engine understands
///
/// The set is closed: anything else is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the current guess text verbatim
    SetGuess(String),
    /// Compare the current guess to the answer and count an attempt
    CheckAnswer,
    /// Start a new round with a freshly drawn word
    Reset,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetGuess(text) => write!(f, "SetGuess({text:?})"),
            Self::CheckAnswer => write!(f, "CheckAnswer"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_guess() {
        assert_eq!(
            Action::SetGuess("Example".to_string()).to_string(),
            "SetGuess(\"Example\")"
        );
        assert_eq!(Action::CheckAnswer.to_string(), "CheckAnswer");
        assert_eq!(Action::Reset.to_string(), "Reset");
    }
}
