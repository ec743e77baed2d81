//! Guessable token representation
//!
//! A token is the atomic unit a player guesses. Most tokens are a single
//! letter, but symbols such as `C#` can be kept together as one token.

use std::fmt;

/// A normalized (trimmed, uppercase) guessable unit
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    /// Normalize raw player input into a token
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased. The
    /// result may be empty; an empty token simply never matches anything.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Token;
    ///
    /// assert_eq!(Token::normalize(" e ").as_str(), "E");
    /// assert_eq!(Token::normalize("c#").as_str(), "C#");
    /// ```
    #[must_use]
    pub fn normalize(input: &str) -> Self {
        Self(input.trim().to_uppercase())
    }

    /// Get the token text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the token holds no text
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<char> for Token {
    fn from(c: char) -> Self {
        Self(c.to_uppercase().collect())
    }
}
