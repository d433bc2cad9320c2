//! Candidate word representation
//!
//! A Token is one blankable word occurrence, anchored to its exact spot in the
//! source lyrics so it can be replaced and restored without re-scanning.

use std::fmt;

/// A candidate word tied to a source location
///
/// Positions and lengths are measured in characters, not bytes, so spans stay
/// meaningful for multi-byte text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    word: String,
    line_index: usize,
    position: usize,
    length: usize,
}

impl Token {
    /// Create a token at a character offset within a line
    ///
    /// Length is derived from the word itself.
    ///
    /// # Examples
    /// ```
    /// use blankverse::core::Token;
    ///
    /// let token = Token::new("grace", 0, 8);
    /// assert_eq!(token.length(), 5);
    /// assert_eq!(token.end(), 13);
    /// ```
    #[must_use]
    pub fn new(word: impl Into<String>, line_index: usize, position: usize) -> Self {
        let word: String = word.into();
        let length = word.chars().count();
        Self {
            word,
            line_index,
            position,
            length,
        }
    }

    /// Get the word exactly as it appeared in the lyrics
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Get the zero-based line this token came from
    #[inline]
    #[must_use]
    pub const fn line_index(&self) -> usize {
        self.line_index
    }

    /// Get the character offset of the first character within the line
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the length of the word in characters
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Get the character offset one past the last character
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.position + self.length
    }

    /// Get the case-folded form used for frequency counting
    #[inline]
    #[must_use]
    pub fn folded(&self) -> String {
        self.word.to_lowercase()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}:{}", self.word, self.line_index, self.position)
    }
}
