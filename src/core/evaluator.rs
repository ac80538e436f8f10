//! Guess evaluation against a target word

use super::{GameError, GuessResult, LetterVerdict, Word};

/// Evaluate `guess` against `target`
///
/// Implements Wordle's feedback rules, including proper handling of duplicate
/// letters.
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct` and remove them from the
///    available pool of target letters
/// 2. Second pass: mark `Present` while the letter still has unclaimed copies in
///    the pool, `Absent` otherwise
///
/// # Errors
/// Returns `GameError::InvalidLength` if the words differ in length.
///
/// # Examples
/// ```
/// use vrdle::core::{Word, evaluate};
///
/// let guess = Word::new("worms").unwrap();
/// let target = Word::new("world").unwrap();
/// let result = evaluate(&guess, &target).unwrap();
///
/// assert_eq!(result.to_string(), "GGG--");
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> Result<GuessResult, GameError> {
    if guess.len() != target.len() {
        return Err(GameError::InvalidLength {
            expected: target.len(),
            actual: guess.len(),
        });
    }

    let mut verdicts = vec![LetterVerdict::Absent; guess.len()];
    let mut available = target.letter_counts();

    // First pass: greens
    for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
        if g == t {
            verdicts[i] = LetterVerdict::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows from whatever the greens left behind
    for (verdict, &letter) in verdicts.iter_mut().zip(guess.letters()) {
        if *verdict == LetterVerdict::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            *verdict = LetterVerdict::Present;
            *count -= 1;
        }
    }

    Ok(GuessResult::new(verdicts))
}
