//! Word bank loading utilities
//!
//! Provides functions to load a word bank from a file or build words from
//! embedded constants.
//!
//! File format, one entry per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! fruit: pear
//! programming-language: C #
//! ```

use super::WordBank;
use crate::core::{Category, Word};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading a word bank file
#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read word bank {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Load a word bank from a file
///
/// # Errors
///
/// Returns `BankError::Io` if the file cannot be read, or `BankError::Parse`
/// for the first malformed line.
///
/// # Examples
/// ```no_run
/// use hangman::wordbank::loader::load_from_file;
///
/// let bank = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", bank.total_words());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, BankError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_bank(&content)
}

/// Parse word bank text
///
/// # Errors
///
/// Returns `BankError::Parse` with the 1-based line number of the first line
/// that has no `:` separator, names an unknown category, or has no word.
pub fn parse_bank(content: &str) -> Result<WordBank, BankError> {
    let mut builder = WordBank::builder();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parse_err = |message: String| BankError::Parse {
            line: line_no,
            message,
        };

        let (category, word) = trimmed
            .split_once(':')
            .ok_or_else(|| parse_err("expected 'category: word'".to_string()))?;
        let category: Category = category.parse().map_err(|e| parse_err(format!("{e}")))?;
        let word = Word::new(word).map_err(|e| parse_err(format!("{e}")))?;

        builder.push(category, word);
    }

    Ok(builder.build())
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordbank::loader::words_from_slice;
/// use hangman::wordbank::FRUIT;
///
/// let words = words_from_slice(FRUIT);
/// assert_eq!(words.len(), FRUIT.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["pear", "C #", "lime"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "PEAR");
        assert_eq!(words[1].text(), "C#");
        assert_eq!(words[2].text(), "LIME");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["pear", "", "   ", "lime"];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_bank_reads_entries() {
        let bank = parse_bank(
            "# my words\n\
             fruit: pear\n\
             \n\
             Fruit: plum\n\
             programming_language: C + +\n",
        )
        .unwrap();

        assert_eq!(bank.words(Category::Fruit).len(), 2);
        let langs = bank.words(Category::ProgrammingLanguage);
        assert_eq!(langs.len(), 1);
        assert_eq!(langs[0].text(), "C++");
        assert_eq!(langs[0].len(), 3);
        assert_eq!(bank.total_words(), 3);
    }

    #[test]
    fn parse_bank_multi_char_tokens() {
        let bank = parse_bank("programming-language: C++ X\n").unwrap();
        let word = &bank.words(Category::ProgrammingLanguage)[0];
        assert_eq!(word.len(), 2);
        assert_eq!(word.tokens()[0].as_str(), "C++");
    }

    #[test]
    fn parse_bank_unknown_category() {
        let err = parse_bank("fruit: pear\nvegetable: kale\n").unwrap_err();
        match err {
            BankError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("vegetable"));
            }
            BankError::Io { .. } => panic!("expected parse error"),
        }
    }

    #[test]
    fn parse_bank_missing_separator() {
        let err = parse_bank("\n\nfruit pear\n").unwrap_err();
        assert!(matches!(err, BankError::Parse { line: 3, .. }));
        assert_eq!(err.to_string(), "line 3: expected 'category: word'");
    }

    #[test]
    fn parse_bank_missing_word() {
        let err = parse_bank("color:   \n").unwrap_err();
        assert!(matches!(err, BankError::Parse { line: 1, .. }));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_from_file("/definitely/not/here/words.txt").unwrap_err();
        assert!(matches!(err, BankError::Io { .. }));
    }

    #[test]
    fn load_from_embedded_fruit() {
        use crate::wordbank::FRUIT;

        let words = words_from_slice(FRUIT);
        assert_eq!(words.len(), FRUIT.len());
    }
}
