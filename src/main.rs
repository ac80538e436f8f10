//! VRdle - CLI
//!
//! Play the word game in a TUI or line mode, evaluate single guesses, or run the
//! spoken-word drill.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use vrdle::{
    commands::{TargetSource, evaluate_words, run_drill, run_simple},
    config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig},
    core::Word,
    drill::SpokenWordDrill,
    output::print_evaluation,
    wordlists::{
        TARGETS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "vrdle",
    about = "Guess the hidden word: green is right, yellow is elsewhere, gray is out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Fixed target word (default: random pick from the word list)
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Guesses allowed per round
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without the TUI
    Simple,

    /// Evaluate one guess against a target
    Evaluate {
        /// The hidden word
        answer: String,

        /// The guess to score
        guess: String,
    },

    /// Spoken-word drill: say the shown word, type what the recognizer heard
    Drill,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load words based on the -w flag
fn load_words(wordlist: Option<&str>, word_length: usize) -> Result<Vec<Word>> {
    match wordlist {
        Some(path) => load_from_file(path, word_length)
            .with_context(|| format!("failed to read word list {path}")),
        None => Ok(words_from_slice(TARGETS, word_length)),
    }
}

fn target_source(cli: &Cli, config: &GameConfig) -> Result<TargetSource> {
    if let Some(target) = &cli.target {
        let word = Word::new(target).context("invalid target word")?;
        return Ok(TargetSource::Fixed(word));
    }
    let words = load_words(cli.wordlist.as_deref(), config.word_length)?;
    Ok(TargetSource::Random(words))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GameConfig::new(cli.word_length, cli.max_attempts);
    config.validate()?;

    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&cli, config),
        Some(Commands::Simple) => run_simple_command(&cli, &config),
        Some(Commands::Evaluate { answer, guess }) => run_evaluate_command(answer, guess),
        Some(Commands::Drill) => run_drill_command(&cli),
    }
}

fn run_play_command(cli: &Cli, config: GameConfig) -> Result<()> {
    use vrdle::interactive::{App, run_tui};

    let app = App::new(target_source(cli, &config)?, config)?;
    run_tui(app)
}

fn run_simple_command(cli: &Cli, config: &GameConfig) -> Result<()> {
    let source = target_source(cli, config)?;
    let stdin = io::stdin();
    run_simple(&source, config, stdin.lock(), io::stdout())?;
    Ok(())
}

fn run_evaluate_command(answer: &str, guess: &str) -> Result<()> {
    let evaluation = evaluate_words(answer, guess)?;
    print_evaluation(&evaluation.guess, &evaluation.target, &evaluation.result);
    Ok(())
}

fn run_drill_command(cli: &Cli) -> Result<()> {
    let words = load_words(cli.wordlist.as_deref(), cli.word_length)?;
    let drill = SpokenWordDrill::new(words.iter().map(Word::text))?;
    let stdin = io::stdin();
    run_drill(&drill, stdin.lock(), io::stdout())?;
    Ok(())
}
