//! Where each round's target comes from

use crate::core::Word;
use crate::wordlists::random_target;
use anyhow::{Result, bail};

/// Target supply for a run of rounds
#[derive(Debug, Clone)]
pub enum TargetSource {
    /// Same word every round
    Fixed(Word),
    /// Random pick from a list each round
    Random(Vec<Word>),
}

impl TargetSource {
    /// Produce the target for the next round
    ///
    /// # Errors
    /// Returns an error if a random source has no words.
    pub fn next_target(&self) -> Result<Word> {
        match self {
            Self::Fixed(word) => Ok(word.clone()),
            Self::Random(words) => match random_target(words, &mut rand::rng()) {
                Some(word) => Ok(word.clone()),
                None => bail!("word list has no words of the configured length"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_source_repeats() {
        let word = Word::new("crane").unwrap();
        let source = TargetSource::Fixed(word.clone());
        assert_eq!(source.next_target().unwrap(), word);
        assert_eq!(source.next_target().unwrap(), word);
    }

    #[test]
    fn random_source_picks_from_list() {
        let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
        let source = TargetSource::Random(words.clone());
        for _ in 0..10 {
            assert!(words.contains(&source.next_target().unwrap()));
        }
    }

    #[test]
    fn empty_random_source_errors() {
        assert!(TargetSource::Random(Vec::new()).next_target().is_err());
    }
}
