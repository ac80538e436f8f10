//! Spoken-word drill, typed edition
//!
//! Shows a random word and checks the transcript the player enters. A speech
//! recognizer would feed the same `check` with its transcript.

use crate::drill::{DrillOutcome, SpokenWordDrill};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run drill rounds until input ends or the player types `quit`
///
/// Returns `(heard, attempted)`.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_drill<R: BufRead, W: Write>(
    drill: &SpokenWordDrill,
    mut reader: R,
    mut out: W,
) -> Result<(usize, usize)> {
    let mut rng = rand::rng();
    let mut heard = 0;
    let mut attempted = 0;

    loop {
        let word = drill.pick(&mut rng);
        writeln!(out, "\nSay: {}", word.bright_yellow().bold())?;
        write!(out, "Transcript (or 'quit'): ")?;
        out.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 || line.trim().eq_ignore_ascii_case("quit") {
            break;
        }

        attempted += 1;
        match SpokenWordDrill::check(word, &line) {
            DrillOutcome::Heard => {
                heard += 1;
                writeln!(out, "{}", "I heard the correct word!".green())?;
            }
            DrillOutcome::Misheard { heard: transcript } => {
                writeln!(
                    out,
                    "{}",
                    format!("That didn't sound right (heard \"{transcript}\").").red()
                )?;
            }
        }
    }

    writeln!(out, "\nMatched {heard} of {attempted}.")?;
    Ok((heard, attempted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn single_word_drill_counts_matches() {
        let drill = SpokenWordDrill::new(["crane"]).unwrap();
        let mut out = Vec::new();
        let (heard, attempted) =
            run_drill(&drill, Cursor::new("Crane\nbrain\nquit\n"), &mut out).unwrap();

        assert_eq!((heard, attempted), (1, 2));
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("heard \"brain\""));
    }
}
