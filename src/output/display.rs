//! Display functions for game results

use super::formatters::{colored_row, create_progress_bar, pending_row};
use crate::core::{GuessResult, Word};
use crate::session::{GameSession, SessionStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Write the whole grid: past attempts, the live row, and empty rows
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_board<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(session.word_length() * 3 + 8).cyan())?;

    for (i, record) in session.history().iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {} {}",
            i + 1,
            colored_row(record),
            record.result().to_emoji()
        )?;
    }

    for row in session.attempts_used()..session.max_attempts() {
        let entry = if row == session.attempts_used() && !session.status().is_terminal() {
            session.partial_entry()
        } else {
            ""
        };
        writeln!(
            out,
            "{:>2}. {}",
            row + 1,
            pending_row(entry, session.word_length()).bright_black()
        )?;
    }

    writeln!(
        out,
        "    [{}] {} of {} attempts left",
        create_progress_bar(
            session.attempts_used(),
            session.max_attempts(),
            session.max_attempts()
        ),
        session.attempts_remaining(),
        session.max_attempts()
    )
}

/// Write the win/loss banner once the round is over
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_outcome<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    match session.status() {
        SessionStatus::Won => {
            let turns = session.attempts_used();
            writeln!(
                out,
                "\n{}",
                format!(
                    "✅ VICTORY! Solved in {turns} {}",
                    if turns == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            )
        }
        SessionStatus::Lost => writeln!(
            out,
            "\n{}",
            format!("❌ GAME OVER! The word was {}", session.target())
                .red()
                .bold()
        ),
        SessionStatus::InProgress => Ok(()),
    }
}

/// Print a one-off evaluation
pub fn print_evaluation(guess: &Word, target: &Word, result: &GuessResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        target.text().bright_yellow().bold(),
        guess.text().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("{}  ({result})", result.to_emoji());

    if result.is_solved() {
        println!("{}", "All letters correct!".green().bold());
    }
}
