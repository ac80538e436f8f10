//! Per-letter feedback for a guess
//!
//! A `GuessResult` is the ordered list of verdicts for one guess:
//! - `Correct` = green (letter in the right position)
//! - `Present` = yellow (letter in the target, wrong position)
//! - `Absent`  = gray (letter not available in the target)

use std::fmt;
use thiserror::Error;

/// Verdict for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterVerdict {
    Correct,
    Present,
    Absent,
}

impl LetterVerdict {
    /// Emoji tile for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code used by the text format (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Ordered verdicts, one per guess position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult(Vec<LetterVerdict>);

/// Error parsing a verdict string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid verdict character {character:?} at position {position}")]
pub struct ParseVerdictError {
    pub position: usize,
    pub character: char,
}

impl GuessResult {
    #[must_use]
    pub fn new(verdicts: Vec<LetterVerdict>) -> Self {
        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is `Correct`
    ///
    /// An empty result is never solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == LetterVerdict::Correct)
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: LetterVerdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert to an emoji string
    ///
    /// # Examples
    /// ```
    /// use vrdle::core::GuessResult;
    ///
    /// let result: GuessResult = "GY-GY".parse().unwrap();
    /// assert_eq!(result.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}

/// Parse a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/⬜ for absent
impl std::str::FromStr for GuessResult {
    type Err = ParseVerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, character)| {
                LetterVerdict::from_char(character).ok_or(ParseVerdictError {
                    position,
                    character,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
