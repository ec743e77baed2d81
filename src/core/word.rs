//! Secret word representation
//!
//! A Word stores its tokens in order along with token position indices for
//! revealing every occurrence of a guess at once.

use super::Token;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A hangman word made of guessable tokens
///
/// Stores the concatenated text for full-word comparison and maintains a map
/// of token positions for repeated letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    tokens: Vec<Token>,
    token_positions: FxHashMap<Token, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one token")]
    Empty,
}

impl Word {
    /// Create a new Word from text
    ///
    /// Plain text splits into one token per character. Whitespace-separated
    /// text gives one token per chunk, so `"C #"` has the two tokens `C` and
    /// `#` and `"C++ X"` has the tokens `C++` and `X`.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the text holds no tokens.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("pear").unwrap();
    /// assert_eq!(word.text(), "PEAR");
    /// assert_eq!(word.len(), 4);
    ///
    /// let lang = Word::new("C #").unwrap();
    /// assert_eq!(lang.text(), "C#");
    /// assert_eq!(lang.len(), 2);
    ///
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let trimmed = text.trim();

        let tokens: Vec<Token> = if trimmed.contains(char::is_whitespace) {
            trimmed.split_whitespace().map(Token::normalize).collect()
        } else {
            trimmed.chars().map(Token::from).collect()
        };

        Self::from_tokens(tokens)
    }

    /// Create a Word from already-split tokens
    ///
    /// # Errors
    /// Returns `WordError::Empty` if no non-empty token is given.
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Result<Self, WordError> {
        let tokens: Vec<Token> = tokens.into_iter().filter(|t| !t.is_empty()).collect();
        if tokens.is_empty() {
            return Err(WordError::Empty);
        }

        let text: String = tokens.iter().map(Token::as_str).collect();

        let mut token_positions: FxHashMap<Token, Vec<usize>> = FxHashMap::default();
        for (i, token) in tokens.iter().enumerate() {
            token_positions.entry(token.clone()).or_default().push(i);
        }

        Ok(Self {
            text,
            tokens,
            token_positions,
        })
    }

    /// Get the concatenated word text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the tokens in order
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens (slots) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: a Word holds at least one token
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get all positions where a token appears
    ///
    /// Returns an empty slice if the token doesn't appear.
    #[inline]
    pub fn positions_of(&self, token: &Token) -> &[usize] {
        self.token_positions
            .get(token)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Iterate over the distinct tokens of the word
    pub fn distinct_tokens(&self) -> impl Iterator<Item = &Token> {
        self.token_positions.keys()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(s: &str) -> Token {
        Token::normalize(s)
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("pear").unwrap();
        assert_eq!(word.text(), "PEAR");
        assert_eq!(word.len(), 4);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("PeAr").unwrap();
        assert_eq!(word.text(), "PEAR");
        assert_eq!(word, Word::new("PEAR").unwrap());
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new(" \t "), Err(WordError::Empty));
        assert_eq!(Word::from_tokens(Vec::new()), Err(WordError::Empty));
    }

    #[test]
    fn word_spaced_tokens() {
        let word = Word::new("C + +").unwrap();
        assert_eq!(word.text(), "C++");
        assert_eq!(word.tokens(), &[tok("C"), tok("+"), tok("+")]);
    }

    #[test]
    fn word_multi_char_token() {
        let word = Word::new("C++ X").unwrap();
        assert_eq!(word.len(), 2);
        assert_eq!(word.tokens()[0].as_str(), "C++");
        assert_eq!(word.text(), "C++X");
    }

    #[test]
    fn word_symbols_without_spaces_split_per_char() {
        let word = Word::new("c#").unwrap();
        assert_eq!(word.tokens(), &[tok("C"), tok("#")]);
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("banana").unwrap();
        assert_eq!(word.positions_of(&tok("a")), &[1, 3, 5]);
        assert_eq!(word.positions_of(&tok("n")), &[2, 4]);
        assert_eq!(word.positions_of(&tok("b")), &[0]);
        assert_eq!(word.positions_of(&tok("z")), &[] as &[usize]);
    }

    #[test]
    fn word_distinct_tokens() {
        let word = Word::new("banana").unwrap();
        let mut distinct: Vec<&str> = word.distinct_tokens().map(Token::as_str).collect();
        distinct.sort_unstable();
        assert_eq!(distinct, vec!["A", "B", "N"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("o b j e c t i v e - c").unwrap();
        assert_eq!(format!("{word}"), "OBJECTIVE-C");
    }
}
