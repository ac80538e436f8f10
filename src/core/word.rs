//! Letter sequence representation
//!
//! A Word stores a case-normalized sequence of ASCII letters. Targets and guesses
//! share this type; the session decides which length is acceptable.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// An uppercase ASCII letter sequence
///
/// Every byte of `text` is an uppercase ASCII letter, so byte index == letter position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word contains invalid character {character:?} at position {position}")]
    InvalidCharacter { position: usize, character: char },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed input is empty
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use vrdle::core::Word;
    ///
    /// let word = Word::new("world").unwrap();
    /// assert_eq!(word.text(), "WORLD");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("w0rld").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some((position, character)) = trimmed
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphabetic())
        {
            return Err(WordError::InvalidCharacter {
                position,
                character,
            });
        }

        Ok(Self {
            text: trimmed.to_ascii_uppercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for verdict calculation with duplicate letters.
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &letter in self.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
