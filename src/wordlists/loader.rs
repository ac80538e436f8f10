//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of `word_length` letters from a file
///
/// One word per line. Blank lines, invalid entries and words of any other
/// length are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use vrdle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/targets.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(content.lines(), word_length);
    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to words of `word_length` letters
///
/// # Examples
/// ```
/// use vrdle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "moon", "sl4te"], 5);
/// assert_eq!(words.len(), 1);
/// assert_eq!(words[0].text(), "CRANE");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    parse_words(slice.iter().copied(), word_length)
}

fn parse_words<'a>(lines: impl Iterator<Item = &'a str>, word_length: usize) -> Vec<Word> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) if word.len() == word_length => Some(word),
                Ok(_) => None,
                Err(err) => {
                    log::debug!("Skipping word list entry {trimmed:?}: {err}");
                    None
                }
            }
        })
        .collect()
}
