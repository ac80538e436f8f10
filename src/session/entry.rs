//! In-progress letter buffer for the current row
//!
//! Holds what the player has typed but not submitted. Rendering only; it carries no
//! evaluation semantics.

use crate::core::{GameError, WordError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryBuffer {
    letters: String,
    capacity: usize,
}

impl EntryBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            letters: String::with_capacity(capacity),
            capacity,
        }
    }

    /// Replace the buffer contents with `letters`
    ///
    /// An empty string clears the buffer. Nothing changes on error.
    ///
    /// # Errors
    /// - `GameError::InvalidGuess` if any character is not an ASCII letter
    /// - `GameError::InvalidLength` if `letters` is longer than the row
    pub fn set(&mut self, letters: &str) -> Result<(), GameError> {
        let letters = letters.trim();
        if let Some((position, character)) = letters
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphabetic())
        {
            return Err(WordError::InvalidCharacter {
                position,
                character,
            }
            .into());
        }

        if letters.len() > self.capacity {
            return Err(GameError::InvalidLength {
                expected: self.capacity,
                actual: letters.len(),
            });
        }

        self.letters = letters.to_ascii_uppercase();
        Ok(())
    }

    /// Append one letter
    ///
    /// # Errors
    /// - `GameError::InvalidGuess` if `letter` is not an ASCII letter
    /// - `GameError::InvalidLength` if the row is already full
    pub fn push(&mut self, letter: char) -> Result<(), GameError> {
        if !letter.is_ascii_alphabetic() {
            return Err(WordError::InvalidCharacter {
                position: self.letters.len(),
                character: letter,
            }
            .into());
        }
        if self.is_full() {
            return Err(GameError::InvalidLength {
                expected: self.capacity,
                actual: self.letters.len() + 1,
            });
        }
        self.letters.push(letter.to_ascii_uppercase());
        Ok(())
    }

    /// Remove and return the last letter
    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_uppercases_and_replaces() {
        let mut buffer = EntryBuffer::new(5);
        buffer.set("wo").unwrap();
        assert_eq!(buffer.as_str(), "WO");
        buffer.set("wor").unwrap();
        assert_eq!(buffer.as_str(), "WOR");
        buffer.set("").unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn set_rejects_overlong_and_keeps_old_contents() {
        let mut buffer = EntryBuffer::new(5);
        buffer.set("wor").unwrap();
        assert_eq!(
            buffer.set("worlds"),
            Err(GameError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
        assert!(matches!(buffer.set("w0r"), Err(GameError::InvalidGuess(_))));
        assert_eq!(buffer.as_str(), "WOR");
    }

    #[test]
    fn push_and_pop() {
        let mut buffer = EntryBuffer::new(3);
        buffer.push('a').unwrap();
        buffer.push('b').unwrap();
        buffer.push('c').unwrap();
        assert!(buffer.is_full());
        assert!(buffer.push('d').is_err());
        assert!(buffer.push('1').is_err());

        assert_eq!(buffer.pop(), Some('C'));
        assert_eq!(buffer.len(), 2);
        buffer.clear();
        assert_eq!(buffer.pop(), None);
    }
}
