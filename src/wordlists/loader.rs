//! Word list loading utilities
//!
//! Reads `SCRAMBLED,correct` lines from files or converts the embedded constant.

use crate::core::{WordList, WordListError, WordPair};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load a word list from a file
///
/// One pair per line as `SCRAMBLED,correct`. Blank lines and lines starting
/// with `#` are skipped. Pairs whose scramble is not a permutation of the
/// answer are kept, with a warning.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read,
/// `WordListError::Malformed` for a line without a comma or with an empty
/// field, and `WordListError::Empty` if no pairs remain.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} pairs", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let list = parse_pairs(&content)?;
    info!(path = %path.display(), count = list.len(), "Loaded word list");
    Ok(list)
}

/// Parse word list text
///
/// # Errors
///
/// See [`load_from_file`].
pub fn parse_pairs(content: &str) -> Result<WordList, WordListError> {
    let mut pairs = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let malformed = || WordListError::Malformed {
            line: index + 1,
            content: trimmed.to_string(),
        };

        let (scrambled, correct) = trimmed.split_once(',').ok_or_else(malformed)?;
        let (scrambled, correct) = (scrambled.trim(), correct.trim());
        if scrambled.is_empty() || correct.is_empty() {
            return Err(malformed());
        }

        let pair = WordPair::new(scrambled, correct);
        if !pair.is_permutation() {
            warn!(line = index + 1, %pair, "Scramble is not a permutation of the answer");
        }
        pairs.push(pair);
    }

    WordList::new(pairs)
}

/// Convert embedded tuples to word pairs
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::pairs_from_slice;
/// use word_scramble::wordlists::WORD_PAIRS;
///
/// let pairs = pairs_from_slice(WORD_PAIRS);
/// assert_eq!(pairs.len(), WORD_PAIRS.len());
/// ```
#[must_use]
pub fn pairs_from_slice(slice: &[(&str, &str)]) -> Vec<WordPair> {
    slice
        .iter()
        .map(|&(scrambled, correct)| WordPair::new(scrambled, correct))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_skips_blank_and_comments() {
        let text = "# header\n\nELPMAXE,example\n   \n# trailing\nELBMARCS,scramble\n";
        let list = parse_pairs(text).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0], WordPair::new("ELPMAXE", "example"));
        assert_eq!(list.as_slice()[1], WordPair::new("ELBMARCS", "scramble"));
    }

    #[test]
    fn parse_trims_fields() {
        let list = parse_pairs("  ELPMAXE ,  example  ").unwrap();
        assert_eq!(list.as_slice()[0], WordPair::new("ELPMAXE", "example"));
    }

    #[test]
    fn parse_splits_on_first_comma() {
        let list = parse_pairs("A,B,C").unwrap();
        assert_eq!(list.as_slice()[0].correct(), "B,C");
    }

    #[test]
    fn parse_keeps_inconsistent_pairs() {
        let list = parse_pairs("RACSMBL,scramble").unwrap();
        assert_eq!(list.len(), 1);
        assert!(!list.as_slice()[0].is_permutation());
    }

    #[test]
    fn parse_rejects_missing_comma() {
        let err = parse_pairs("ELPMAXE,example\nnocomma\n").unwrap_err();
        assert!(matches!(
            err,
            WordListError::Malformed { line: 2, ref content } if content == "nocomma"
        ));
    }

    #[test]
    fn parse_rejects_empty_field() {
        assert!(matches!(
            parse_pairs(",example"),
            Err(WordListError::Malformed { line: 1, .. })
        ));
        assert!(matches!(
            parse_pairs("ELPMAXE,  "),
            Err(WordListError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn parse_rejects_empty_list() {
        assert!(matches!(parse_pairs(""), Err(WordListError::Empty)));
        assert!(matches!(
            parse_pairs("# only comments\n\n"),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn load_from_file_reads_pairs() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "ELPMAXE,example").unwrap();
            writeln!(file, "RETCARAHC,character").unwrap();
        }

        let list = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[1].correct(), "character");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(WordListError::Io(_))));
    }

    #[test]
    fn pairs_from_slice_converts() {
        let pairs = pairs_from_slice(&[("ELPMAXE", "example"), ("ELBMARCS", "scramble")]);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].scrambled(), "ELBMARCS");
    }

    #[test]
    fn pairs_from_slice_empty() {
        assert!(pairs_from_slice(&[]).is_empty());
    }
}
