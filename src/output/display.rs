//! Display functions for command results

use crate::core::WordList;
use colored::Colorize;
use std::io::{self, Write};

/// Print every pair of a word list, flagging scrambles that don't use the answer's letters
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_word_list<W: Write>(words: &WordList, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "WORD LIST".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    let mut inconsistent = 0;
    writeln!(out)?;
    for (i, pair) in words.iter().enumerate() {
        let marker = if pair.is_permutation() {
            "✓".green()
        } else {
            inconsistent += 1;
            "!".yellow().bold()
        };
        writeln!(
            out,
            "  {}. {} {} → {}",
            format!("{:>3}", i + 1).bright_black(),
            marker,
            format!("{:<16}", pair.scrambled()).bright_yellow().bold(),
            pair.correct()
        )?;
    }

    writeln!(out, "\n   Pairs:          {}", words.len())?;
    if inconsistent > 0 {
        writeln!(
            out,
            "   {}",
            format!("{inconsistent} scramble(s) are not a permutation of the answer").yellow()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordPair;

    fn render(words: &WordList) -> String {
        let mut out = Vec::new();
        print_word_list(words, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_every_pair() {
        let words = WordList::new(vec![
            WordPair::new("ELPMAXE", "example"),
            WordPair::new("ELBMARCS", "scramble"),
        ])
        .unwrap();
        let output = render(&words);

        assert!(output.contains("ELPMAXE"));
        assert!(output.contains("example"));
        assert!(output.contains("ELBMARCS"));
        assert!(output.contains("scramble"));
        assert!(output.contains("Pairs:          2"));
        assert!(!output.contains("not a permutation"));
    }

    #[test]
    fn flags_inconsistent_pairs() {
        let words = WordList::new(vec![
            WordPair::new("ELAPXPME", "example"),
            WordPair::new("RACSMBL", "scramble"),
            WordPair::new("RETCARAHC", "character"),
        ])
        .unwrap();
        let output = render(&words);

        assert!(output.contains("2 scramble(s) are not a permutation of the answer"));
    }
}
