//! TUI rendering with ratatui
//!
//! The letter grid, messages and status bar.

use super::app::{App, MessageStyle};
use crate::core::LetterVerdict;
use crate::session::SessionStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let accent = theme_color(app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], accent);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Grid
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0], accent);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

/// Accent color for an environment theme
fn theme_color(theme: &str) -> Color {
    match theme {
        "night" => Color::Blue,
        "starry" => Color::LightCyan,
        "egypt" => Color::Yellow,
        "forest" => Color::Green,
        "dream" => Color::Magenta,
        "volcano" => Color::Red,
        _ => Color::Cyan,
    }
}

fn verdict_style(verdict: LetterVerdict) -> Style {
    let bg = match verdict {
        LetterVerdict::Correct => Color::Green,
        LetterVerdict::Present => Color::Yellow,
        LetterVerdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_header(f: &mut Frame, area: Rect, accent: Color) {
    let header = Paragraph::new("🌌 VRdle")
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(accent)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect, accent: Color) {
    let session = app.session();
    let mut lines = vec![Line::from("")];

    for record in session.history() {
        let mut spans = vec![Span::raw("  ")];
        for (letter, verdict) in record.tiles() {
            spans.push(Span::styled(format!(" {letter} "), verdict_style(verdict)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let pending = Style::default().fg(Color::White).bg(Color::Black);
    for row in session.attempts_used()..session.max_attempts() {
        let entry = if row == session.attempts_used() && !app.is_over() {
            session.partial_entry()
        } else {
            ""
        };
        let mut spans = vec![Span::raw("  ")];
        for i in 0..session.word_length() {
            let letter = entry.chars().nth(i).unwrap_or('·');
            spans.push(Span::styled(format!(" {letter} "), pending));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match session.status() {
        SessionStatus::InProgress => " Grid ".to_string(),
        SessionStatus::Won => " 🎉 VICTORY! 🎉 ".to_string(),
        SessionStatus::Lost => format!(" The word was {} ", session.target()),
    };

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(accent)),
    );
    f.render_widget(grid, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Attempts gauge
            Constraint::Percentage(50), // Messages
            Constraint::Min(4),         // Stats
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let session = app.session();
    let used = session.attempts_used();
    let max = session.max_attempts();
    let percent = (used * 100 / max).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} used | {} left", session.attempts_remaining()));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let win_rate = if stats.total_games > 0 {
        stats.games_won * 100 / stats.total_games
    } else {
        0
    };

    let mut lines = vec![Line::from(format!(
        "Games: {} | Win Rate: {win_rate}%",
        stats.total_games
    ))];
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = "█".repeat(count * 16 / most);
        lines.push(Line::from(vec![
            Span::raw(format!("{attempts}: ")),
            Span::styled(bar, Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let theme = Paragraph::new(format!("Theme: {}", app.theme)).alignment(Alignment::Center);
    f.render_widget(theme, chunks[0]);

    let help_text = if app.is_over() {
        "q: Quit | n: New Game | Tab: Theme"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Tab: Theme | Ctrl-N: New | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
