//! Core domain types for the word game
//!
//! Pure types with no rendering or audio dependencies: letter sequences, verdicts,
//! the evaluator and the errors they share.

mod error;
mod evaluator;
mod verdict;
mod word;

pub use error::GameError;
pub use evaluator::evaluate;
pub use verdict::{GuessResult, LetterVerdict, ParseVerdictError};
pub use word::{Word, WordError};
