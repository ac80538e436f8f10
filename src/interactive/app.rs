//! TUI application state and logic

use crate::audio::{AudioCue, AudioFeedback, LogSink};
use crate::commands::TargetSource;
use crate::config::GameConfig;
use crate::core::GameError;
use crate::session::{GameSession, ObservedSession, SessionStatus};
use crate::themes::{ThemeCatalog, ThemeRotation};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub observed: ObservedSession,
    pub source: TargetSource,
    pub config: GameConfig,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub catalog: ThemeCatalog,
    pub theme: &'static str,
    rotation: ThemeRotation,
    audio: AudioFeedback<LogSink>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = attempts used for a win
    pub guess_distribution: Vec<usize>,
}

impl App {
    /// Build the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the first target cannot be produced or does not fit the
    /// configuration.
    pub fn new(source: TargetSource, config: GameConfig) -> Result<Self> {
        let catalog = ThemeCatalog::default();
        let mut rotation = ThemeRotation::default_for(&catalog)?;
        let theme = rotation.advance();

        let mut observed = ObservedSession::new(Self::start_round(&source, &config)?);
        observed.subscribe(AudioFeedback::new(LogSink));

        Ok(Self {
            observed,
            source,
            config,
            messages: vec![Message {
                text: format!(
                    "Guess the {}-letter word. Type and press Enter.",
                    config.word_length
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                guess_distribution: vec![0; config.max_attempts + 1],
                ..Statistics::default()
            },
            should_quit: false,
            catalog,
            theme,
            rotation,
            audio: AudioFeedback::new(LogSink),
        })
    }

    fn start_round(source: &TargetSource, config: &GameConfig) -> Result<GameSession> {
        let target = source.next_target()?;
        Ok(GameSession::with_config(target.text(), config)?)
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        self.observed.session()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.session().status().is_terminal()
    }

    pub fn type_letter(&mut self, letter: char) {
        match self.observed.push_letter(letter) {
            Ok(()) | Err(GameError::InvalidLength { .. }) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn backspace(&mut self) {
        self.observed.delete_partial_entry();
    }

    pub fn submit(&mut self) {
        let entry_len = self.session().partial_entry().len();
        if entry_len < self.config.word_length {
            self.add_message(
                &format!("Word must be exactly {} letters!", self.config.word_length),
                MessageStyle::Error,
            );
            return;
        }

        match self.observed.submit_entry() {
            Ok(record) => {
                let status = self.session().status();
                match status {
                    SessionStatus::Won => {
                        let attempts = self.session().attempts_used();
                        self.record_game(true, attempts);
                        let celebration = match attempts {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    SessionStatus::Lost => {
                        self.record_game(false, 0);
                        let text = format!("The word was {}", self.session().target());
                        self.add_message(&text, MessageStyle::Error);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    SessionStatus::InProgress => {
                        let text = format!(
                            "{} {}  ({} left)",
                            record.guess(),
                            record.result().to_emoji(),
                            self.session().attempts_remaining()
                        );
                        self.add_message(&text, MessageStyle::Info);
                    }
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn record_game(&mut self, won: bool, attempts: usize) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(attempts) {
                *slot += 1;
            }
        }
    }

    /// Start a new round, keeping stats and theme
    pub fn new_game(&mut self) {
        match Self::start_round(&self.source, &self.config) {
            Ok(session) => {
                self.observed.replace_session(session);
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&format!("{err:#}"), MessageStyle::Error),
        }
    }

    pub fn cycle_theme(&mut self) {
        let requested = self.rotation.advance();
        self.theme = self.catalog.switch(self.theme, Some(requested)).name;
        self.audio.play(AudioCue::ThemeChange);
        log::info!("Theme switched to: {}", self.theme);
        self.add_message(&format!("Theme: {}", self.theme), MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('n') if ctrl => app.new_game(),
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Tab => app.cycle_theme(),
                KeyCode::Char('q') if app.is_over() => app.should_quit = true,
                KeyCode::Char('n') if app.is_over() => app.new_game(),
                KeyCode::Char(c) if !app.is_over() && c.is_ascii_alphabetic() => {
                    app.type_letter(c);
                }
                KeyCode::Backspace => app.backspace(),
                KeyCode::Enter if !app.is_over() => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn app(target: &str) -> App {
        App::new(
            TargetSource::Fixed(Word::new(target).unwrap()),
            GameConfig::default(),
        )
        .unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.type_letter(c);
        }
    }

    #[test]
    fn typing_fills_the_current_row_only() {
        let mut app = app("crane");
        type_word(&mut app, "slates");
        assert_eq!(app.session().partial_entry(), "SLATE");
        app.backspace();
        assert_eq!(app.session().partial_entry(), "SLAT");
    }

    #[test]
    fn short_submission_is_refused_without_using_an_attempt() {
        let mut app = app("crane");
        type_word(&mut app, "cra");
        app.submit();
        assert_eq!(app.session().attempts_used(), 0);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn win_updates_stats_and_new_game_resets() {
        let mut app = app("crane");
        type_word(&mut app, "slate");
        app.submit();
        type_word(&mut app, "crane");
        app.submit();

        assert!(app.is_over());
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);

        app.new_game();
        assert!(!app.is_over());
        assert_eq!(app.session().attempts_used(), 0);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn theme_cycles_through_rotation() {
        let mut app = app("crane");
        assert_eq!(app.theme, "night");
        app.cycle_theme();
        assert_eq!(app.theme, "starry");
        app.cycle_theme();
        assert_eq!(app.theme, "night");
    }
}
