//! Simple line-mode game
//!
//! Text-based play without the TUI. Reads whole guesses from any reader so the loop
//! can be driven by stdin or by a test.

use super::TargetSource;
use crate::audio::{AudioFeedback, LogSink};
use crate::config::GameConfig;
use crate::output::{write_board, write_outcome};
use crate::session::{GameSession, ObservedSession, SessionStatus};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Tally of rounds played in one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    pub games_played: usize,
    pub games_won: usize,
}

enum Input {
    Guess(String),
    NewGame,
    Quit,
}

/// Run the simple interactive mode until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure, or if a round cannot be started (empty word
/// list, target length not matching the configuration).
pub fn run_simple<R: BufRead, W: Write>(
    source: &TargetSource,
    config: &GameConfig,
    mut reader: R,
    mut out: W,
) -> Result<PlaySummary> {
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║            VRdle - Line Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        config.word_length, config.max_attempts
    )?;
    writeln!(out, "Commands: 'new' for a new word, 'quit' to exit\n")?;

    let mut summary = PlaySummary::default();
    let mut observed = ObservedSession::new(start_round(source, config)?);
    observed.subscribe(AudioFeedback::new(LogSink));

    loop {
        write_board(&mut out, observed.session())?;

        let Some(input) = read_input(&mut reader, &mut out, "Guess")? else {
            break;
        };

        match input {
            Input::Quit => break,
            Input::NewGame => {
                observed.replace_session(start_round(source, config)?);
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Input::Guess(guess) => {
                if let Err(err) = observed.submit_guess(&guess) {
                    writeln!(out, "{}", format!("❌ {err}").red())?;
                    continue;
                }

                let session = observed.session();
                if !session.status().is_terminal() {
                    continue;
                }

                write_board(&mut out, session)?;
                write_outcome(&mut out, session)?;
                summary.games_played += 1;
                if session.status() == SessionStatus::Won {
                    summary.games_won += 1;
                }

                if !ask_play_again(&mut reader, &mut out)? {
                    break;
                }
                observed.replace_session(start_round(source, config)?);
                writeln!(out, "\n🔄 New game started!\n")?;
            }
        }
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! Won {} of {}.\n",
        summary.games_won, summary.games_played
    )?;
    Ok(summary)
}

fn start_round(source: &TargetSource, config: &GameConfig) -> Result<GameSession> {
    let target = source.next_target()?;
    Ok(GameSession::with_config(target.text(), config)?)
}

/// Read one line; `None` at end of input
fn read_input<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<Input>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let input = match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        other => Input::Guess(other.to_string()),
    };
    Ok(Some(input))
}

fn ask_play_again<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "Play again? (yes/no): ")?;
    out.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim().to_lowercase().as_str(), "yes" | "y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::io::Cursor;

    fn fixed(word: &str) -> TargetSource {
        TargetSource::Fixed(Word::new(word).unwrap())
    }

    fn play(source: &TargetSource, input: &str) -> (PlaySummary, String) {
        let mut out = Vec::new();
        let summary =
            run_simple(source, &GameConfig::default(), Cursor::new(input), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_then_decline_replay() {
        let (summary, output) = play(&fixed("world"), "worms\nworld\nno\n");
        assert_eq!(
            summary,
            PlaySummary {
                games_played: 1,
                games_won: 1
            }
        );
        assert!(output.contains("VICTORY"));
        assert!(output.contains("Solved in 2 guesses"));
    }

    #[test]
    fn loss_reveals_target() {
        let input = "slate\npious\ndumpy\nwight\nblock\nfuzzy\nn\n";
        let (summary, output) = play(&fixed("crane"), input);
        assert_eq!(summary.games_played, 1);
        assert_eq!(summary.games_won, 0);
        assert!(output.contains("The word was CRANE"));
    }

    #[test]
    fn invalid_guess_is_reported_and_game_continues() {
        let (summary, output) = play(&fixed("crane"), "cat\ncrane\nno\n");
        assert!(output.contains("Guess must be exactly 5 letters, got 3"));
        assert_eq!(summary.games_won, 1);
    }

    #[test]
    fn quit_and_eof_end_cleanly() {
        let (summary, output) = play(&fixed("crane"), "quit\n");
        assert_eq!(summary, PlaySummary::default());
        assert!(output.contains("Thanks for playing"));

        let (summary, _) = play(&fixed("crane"), "");
        assert_eq!(summary.games_played, 0);
    }

    #[test]
    fn replay_starts_a_fresh_round() {
        let (summary, _) = play(&fixed("crane"), "crane\ny\ncrane\nn\n");
        assert_eq!(summary.games_played, 2);
        assert_eq!(summary.games_won, 2);
    }

    #[test]
    fn target_length_must_match_config() {
        let mut out = Vec::new();
        let result = run_simple(
            &fixed("ox"),
            &GameConfig::default(),
            Cursor::new(""),
            &mut out,
        );
        assert!(result.is_err());
    }
}
