//! Round configuration

use crate::core::GameError;

/// Default number of letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of guesses per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Shape of a round: how long words are and how many guesses are allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
        }
    }

    /// Check the configuration is playable
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if either field is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.word_length == 0 {
            return Err(GameError::InvalidConfiguration(
                "word length must be at least 1".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(GameError::InvalidConfiguration(
                "max attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }
}
