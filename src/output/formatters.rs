//! Formatting utilities shared by the TUI and the line-based mode

/// Shown after a correct check
pub const CORRECT_MESSAGE: &str = "Correct!";

/// Shown after an incorrect check
pub const INCORRECT_MESSAGE: &str = "Incorrect, try again!";

/// Message for the latest check, or `None` before the first check of a round
#[must_use]
pub const fn feedback_message(is_correct: Option<bool>) -> Option<&'static str> {
    match is_correct {
        None => None,
        Some(true) => Some(CORRECT_MESSAGE),
        Some(false) => Some(INCORRECT_MESSAGE),
    }
}

/// Format the attempts counter
#[must_use]
pub fn attempts_label(attempts: u32) -> String {
    format!("Attempts: {attempts}")
}

/// Space out letters for display, e.g. `ELAPXPME` → `E L A P X P M E`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);
    for (i, ch) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}
