//! One-shot guess evaluation

use crate::core::{GuessResult, Word, evaluate};
use anyhow::{Context, Result};

/// Outcome of evaluating one guess
pub struct Evaluation {
    pub target: Word,
    pub guess: Word,
    pub result: GuessResult,
}

/// Evaluate `guess` against `target` without starting a session
///
/// # Errors
///
/// Returns an error if either word is not a letter sequence or their lengths differ.
pub fn evaluate_words(target: &str, guess: &str) -> Result<Evaluation> {
    let target = Word::new(target).context("invalid target word")?;
    let guess = Word::new(guess).context("invalid guess")?;
    let result = evaluate(&guess, &target)?;

    Ok(Evaluation {
        target,
        guess,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_duplicate_letters() {
        let evaluation = evaluate_words("speed", "erase").unwrap();
        assert_eq!(evaluation.result.to_string(), "Y--YY");
        assert_eq!(evaluation.guess.text(), "ERASE");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(evaluate_words("speed", "era").is_err());
        assert!(evaluate_words("sp33d", "erase").is_err());
        assert!(evaluate_words("speed", "").is_err());
    }
}
