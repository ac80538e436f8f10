//! Formatting utilities for terminal output

use crate::core::LetterVerdict;
use crate::session::AttemptRecord;
use colored::{ColoredString, Colorize};

/// One colored tile: the letter on its verdict's background
#[must_use]
pub fn colored_tile(letter: char, verdict: LetterVerdict) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        LetterVerdict::Correct => text.black().on_green().bold(),
        LetterVerdict::Present => text.black().on_yellow().bold(),
        LetterVerdict::Absent => text.white().on_bright_black(),
    }
}

/// Whole attempt as a row of colored tiles
#[must_use]
pub fn colored_row(record: &AttemptRecord) -> String {
    record
        .tiles()
        .map(|(letter, verdict)| colored_tile(letter, verdict).to_string())
        .collect()
}

/// Placeholder row for attempts not yet made, with any live letters filled in
#[must_use]
pub fn pending_row(entry: &str, word_length: usize) -> String {
    (0..word_length)
        .map(|i| {
            let letter = entry.chars().nth(i).unwrap_or('_');
            format!(" {letter} ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(used: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (used * width / total).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
