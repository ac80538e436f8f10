//! One round of play
//!
//! `GameSession` owns the target, the attempt history and the status. Every failing
//! call returns before touching state.

use super::EntryBuffer;
use crate::config::{DEFAULT_MAX_ATTEMPTS, GameConfig};
use crate::core::{GameError, GuessResult, LetterVerdict, Word, evaluate};
use std::fmt;

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    /// True once the round is won or lost
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// A submitted guess and its verdicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    guess: Word,
    result: GuessResult,
}

impl AttemptRecord {
    #[must_use]
    pub fn new(guess: Word, result: GuessResult) -> Self {
        Self { guess, result }
    }

    #[inline]
    #[must_use]
    pub fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> &GuessResult {
        &self.result
    }

    /// `(letter, verdict)` pairs in position order
    pub fn tiles(&self) -> impl Iterator<Item = (char, LetterVerdict)> + '_ {
        self.guess
            .letters()
            .iter()
            .map(|&b| char::from(b))
            .zip(self.result.verdicts().iter().copied())
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.result.is_solved()
    }
}

/// Stateful controller for a single round
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    max_attempts: usize,
    history: Vec<AttemptRecord>,
    status: SessionStatus,
    entry: EntryBuffer,
}

impl GameSession {
    /// Start a round against `target` with `max_attempts` guesses
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if `target` is not a non-empty
    /// letter sequence or `max_attempts` is zero.
    ///
    /// # Examples
    /// ```
    /// use vrdle::session::{GameSession, SessionStatus};
    ///
    /// let mut session = GameSession::new("world", 6).unwrap();
    /// let record = session.submit_guess("worms").unwrap();
    /// assert_eq!(record.result().to_string(), "GGG--");
    /// assert_eq!(session.status(), SessionStatus::InProgress);
    /// assert_eq!(session.attempts_remaining(), 5);
    /// ```
    pub fn new(target: &str, max_attempts: usize) -> Result<Self, GameError> {
        let target = Word::new(target)
            .map_err(|e| GameError::InvalidConfiguration(format!("invalid target word: {e}")))?;

        if max_attempts < 1 {
            return Err(GameError::InvalidConfiguration(
                "max attempts must be at least 1".to_string(),
            ));
        }

        log::debug!(
            "New session: {} letters, {max_attempts} attempts",
            target.len()
        );

        Ok(Self {
            entry: EntryBuffer::new(target.len()),
            target,
            max_attempts,
            history: Vec::with_capacity(max_attempts),
            status: SessionStatus::InProgress,
        })
    }

    /// Start a round with the default six attempts
    ///
    /// # Errors
    /// Same as [`GameSession::new`].
    pub fn with_default_attempts(target: &str) -> Result<Self, GameError> {
        Self::new(target, DEFAULT_MAX_ATTEMPTS)
    }

    /// Start a round shaped by `config`
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if the config is invalid or the
    /// target length differs from `config.word_length`.
    pub fn with_config(target: &str, config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let session = Self::new(target, config.max_attempts)?;
        if session.word_length() != config.word_length {
            return Err(GameError::InvalidConfiguration(format!(
                "target must be {} letters, got {}",
                config.word_length,
                session.word_length()
            )));
        }
        Ok(session)
    }

    /// Submit a complete guess
    ///
    /// On success the attempt is appended, the live entry is cleared and the status
    /// is updated: `Won` on an all-correct result, otherwise `Lost` once the last
    /// attempt is used.
    ///
    /// # Errors
    /// - `GameError::SessionTerminated` if the round is already won or lost
    /// - `GameError::InvalidLength` if `guess` differs in length from the target,
    ///   including an empty guess
    /// - `GameError::InvalidGuess` if a guess of the right length holds a non-letter
    pub fn submit_guess(&mut self, guess: &str) -> Result<AttemptRecord, GameError> {
        self.ensure_in_progress()?;

        let actual = guess.trim().chars().count();
        if actual != self.target.len() {
            return Err(GameError::InvalidLength {
                expected: self.target.len(),
                actual,
            });
        }

        let guess = Word::new(guess)?;
        let result = evaluate(&guess, &self.target)?;

        let record = AttemptRecord::new(guess, result);
        self.history.push(record.clone());
        self.entry.clear();

        if record.is_solved() {
            self.status = SessionStatus::Won;
            log::info!("Solved in {} attempt(s)", self.history.len());
        } else if self.history.len() >= self.max_attempts {
            self.status = SessionStatus::Lost;
            log::info!("Out of attempts; target was {}", self.target);
        }

        log::debug!(
            "Attempt {}: {} {}",
            self.history.len(),
            record.guess(),
            record.result()
        );

        Ok(record)
    }

    /// Replace the in-progress letters for the current row
    ///
    /// # Errors
    /// - `GameError::SessionTerminated` if the round is over
    /// - `GameError::InvalidLength` if `letters` is longer than the target
    /// - `GameError::InvalidGuess` if `letters` contains a non-letter
    pub fn update_partial_entry(&mut self, letters: &str) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.entry.set(letters)
    }

    /// Append a single letter to the in-progress row
    ///
    /// # Errors
    /// Same conditions as [`GameSession::update_partial_entry`].
    pub fn push_letter(&mut self, letter: char) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.entry.push(letter)
    }

    /// Remove the last in-progress letter, returning it
    ///
    /// Does nothing once the round is over.
    pub fn delete_partial_entry(&mut self) -> Option<char> {
        if self.status.is_terminal() {
            return None;
        }
        self.entry.pop()
    }

    #[inline]
    #[must_use]
    pub fn partial_entry(&self) -> &str {
        self.entry.as_str()
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts - self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    /// Attempts in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    #[must_use]
    pub fn last_attempt(&self) -> Option<&AttemptRecord> {
        self.history.last()
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::SessionTerminated {
                status: self.status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_rejects_bad_parameters() {
        assert!(matches!(
            GameSession::new("", 6),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameSession::new("cr4ne", 6),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameSession::new("crane", 0),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn construct_starts_in_progress() {
        let session = GameSession::with_default_attempts("crane").unwrap();
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.attempts_remaining(), 6);
        assert!(session.history().is_empty());
        assert_eq!(session.target().text(), "CRANE");
    }

    #[test]
    fn with_config_checks_word_length() {
        let config = GameConfig::new(5, 4);
        let session = GameSession::with_config("crane", &config).unwrap();
        assert_eq!(session.max_attempts(), 4);

        assert!(matches!(
            GameSession::with_config("cranes", &config),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameSession::with_config("crane", &GameConfig::new(5, 0)),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn world_scenario() {
        let mut session = GameSession::new("WORLD", 6).unwrap();

        let first = session.submit_guess("WORMS").unwrap();
        let verdicts = first.result().verdicts();
        assert_eq!(&verdicts[..3], &[LetterVerdict::Correct; 3]);
        assert_eq!(verdicts[3], LetterVerdict::Absent);
        assert_eq!(verdicts[4], LetterVerdict::Absent);
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.attempts_remaining(), 5);

        // Second submission solves it
        let second = session.submit_guess("WORLD").unwrap();
        assert!(second.is_solved());
        assert_eq!(session.status(), SessionStatus::Won);
        assert_eq!(session.attempts_remaining(), 4);
    }

    #[test]
    fn win_on_first_attempt_regardless_of_remaining() {
        let mut session = GameSession::new("crane", 6).unwrap();
        session.submit_guess("crane").unwrap();
        assert_eq!(session.status(), SessionStatus::Won);
        assert_eq!(session.attempts_remaining(), 5);
    }

    #[test]
    fn lost_exactly_after_last_attempt() {
        let mut session = GameSession::new("crane", 6).unwrap();
        let misses = ["slate", "pious", "dumpy", "wight", "block", "fuzzy"];

        for (i, guess) in misses.iter().enumerate() {
            assert_eq!(session.status(), SessionStatus::InProgress, "before {i}");
            session.submit_guess(guess).unwrap();
        }

        assert_eq!(session.status(), SessionStatus::Lost);
        assert_eq!(session.attempts_remaining(), 0);
        assert_eq!(session.history().len(), 6);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut session = GameSession::new("crane", 2).unwrap();
        session.submit_guess("slate").unwrap();
        session.submit_guess("crane").unwrap();
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn terminated_session_rejects_without_mutation() {
        let mut session = GameSession::new("crane", 6).unwrap();
        session.submit_guess("crane").unwrap();
        let before = session.history().to_vec();

        let err = session.submit_guess("slate").unwrap_err();
        assert_eq!(
            err,
            GameError::SessionTerminated {
                status: SessionStatus::Won
            }
        );
        assert_eq!(session.history(), before.as_slice());
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn wrong_length_rejected_without_mutation() {
        let mut session = GameSession::new("crane", 6).unwrap();
        session.submit_guess("slate").unwrap();

        assert_eq!(
            session.submit_guess("cranes"),
            Err(GameError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
        assert!(matches!(
            session.submit_guess("cr@ne"),
            Err(GameError::InvalidGuess(_))
        ));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.attempts_remaining(), 5);
    }

    #[test]
    fn length_is_checked_before_letters() {
        let mut session = GameSession::new("crane", 6).unwrap();

        assert_eq!(
            session.submit_guess(""),
            Err(GameError::InvalidLength {
                expected: 5,
                actual: 0
            })
        );
        assert_eq!(
            session.submit_guess("crane!"),
            Err(GameError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(
            session.submit_guess("cr@nes"),
            Err(GameError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
        assert!(session.history().is_empty());

        session.submit_guess("slate").unwrap();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.attempts_remaining(), 5);
        assert_eq!(session.status(), SessionStatus::InProgress);

        // Still usable afterwards
        session.submit_guess("crane").unwrap();
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn long_single_letter_target_can_be_won() {
        let target = "z".repeat(256);
        let mut session = GameSession::new(&target, 6).unwrap();
        let record = session.submit_guess(&target).unwrap();
        assert!(record.is_solved());
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn partial_entry_is_cleared_on_submit() {
        let mut session = GameSession::new("crane", 6).unwrap();
        session.update_partial_entry("sla").unwrap();
        session.push_letter('t').unwrap();
        assert_eq!(session.partial_entry(), "SLAT");
        assert_eq!(session.delete_partial_entry(), Some('T'));
        assert_eq!(session.status(), SessionStatus::InProgress);

        session.submit_guess("slate").unwrap();
        assert_eq!(session.partial_entry(), "");
    }

    #[test]
    fn partial_entry_after_game_end() {
        let mut session = GameSession::new("crane", 1).unwrap();
        session.submit_guess("slate").unwrap();
        assert_eq!(session.status(), SessionStatus::Lost);

        assert!(matches!(
            session.update_partial_entry("cr"),
            Err(GameError::SessionTerminated { .. })
        ));
        assert!(session.push_letter('c').is_err());
        assert_eq!(session.delete_partial_entry(), None);
        assert_eq!(session.status(), SessionStatus::Lost);
    }

    #[test]
    fn tiles_pair_letters_with_verdicts() {
        let mut session = GameSession::new("world", 6).unwrap();
        let record = session.submit_guess("worms").unwrap();
        let tiles: Vec<_> = record.tiles().collect();
        assert_eq!(tiles[0], ('W', LetterVerdict::Correct));
        assert_eq!(tiles[3], ('M', LetterVerdict::Absent));
        assert_eq!(session.last_attempt(), Some(&record));
    }
}
