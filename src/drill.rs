//! Spoken-word drill
//!
//! A pronunciation check that lives beside the game: pick a random word, compare
//! it with whatever the recognizer heard. It never touches a game session.

use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    #[error("Drill word list is empty")]
    EmptyWordList,
}

/// Result of comparing a transcript with the expected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrillOutcome {
    Heard,
    Misheard { heard: String },
}

impl DrillOutcome {
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Heard)
    }
}

#[derive(Debug, Clone)]
pub struct SpokenWordDrill {
    words: Vec<String>,
}

impl SpokenWordDrill {
    /// Build a drill over `words` (stored lowercase)
    ///
    /// # Errors
    /// Returns `DrillError::EmptyWordList` if no non-blank words are supplied.
    pub fn new<I, S>(words: I) -> Result<Self, DrillError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(DrillError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Choose the next word to say
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty by construction
        self.words.choose(rng).map_or("", String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Compare a recognizer transcript with `expected`, ignoring case and padding
    ///
    /// # Examples
    /// ```
    /// use vrdle::drill::{DrillOutcome, SpokenWordDrill};
    ///
    /// assert_eq!(SpokenWordDrill::check("crane", " Crane "), DrillOutcome::Heard);
    /// assert!(!SpokenWordDrill::check("crane", "brain").is_match());
    /// ```
    #[must_use]
    pub fn check(expected: &str, transcript: &str) -> DrillOutcome {
        let heard = transcript.trim().to_lowercase();
        if heard == expected.trim().to_lowercase() {
            DrillOutcome::Heard
        } else {
            DrillOutcome::Misheard { heard }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_lists_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(
            SpokenWordDrill::new(none).unwrap_err(),
            DrillError::EmptyWordList
        );
        assert!(SpokenWordDrill::new(["", "  "]).is_err());
    }

    #[test]
    fn pick_returns_a_listed_word() {
        let drill = SpokenWordDrill::new(["Crane", "SLATE", "world"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let word = drill.pick(&mut rng);
            assert!(["crane", "slate", "world"].contains(&word));
        }
        assert_eq!(drill.len(), 3);
    }

    #[test]
    fn check_reports_what_was_heard() {
        assert!(SpokenWordDrill::check("world", "WORLD").is_match());
        assert_eq!(
            SpokenWordDrill::check("world", "Whirled "),
            DrillOutcome::Misheard {
                heard: "whirled".to_string()
            }
        );
    }
}
