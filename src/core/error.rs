//! Errors surfaced by the evaluator and the game session

use super::WordError;
use crate::session::SessionStatus;
use thiserror::Error;

/// Caller-input errors
///
/// Every variant is detected before any session state changes, so a session that
/// returns one of these is still usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Bad construction parameters (empty target, zero attempts, length mismatch)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Guess length differs from the target length
    #[error("Guess must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Submission after the game reached a terminal status
    #[error("Session is over ({status}); no further input is accepted")]
    SessionTerminated { status: SessionStatus },

    /// Guess text is not a letter sequence
    #[error("Invalid guess: {0}")]
    InvalidGuess(#[from] WordError),
}
