//! TUI rendering with ratatui
//!
//! Board, keyboard, and message panels for a single round.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{KEYBOARD_ROWS, LetterHint, TOTAL_GUESSES, WORD_LENGTH};
use crate::game::{Puzzle, Turn};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Length(TOTAL_GUESSES as u16 + 2), // Board
            Constraint::Length(5),                        // Keyboard
            Constraint::Min(4),                           // Messages
            Constraint::Length(3),                        // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn hint_style(hint: LetterHint) -> Style {
    match hint {
        LetterHint::Located => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterHint::Somewhere => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterHint::NotInWord => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterHint::Unknown => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut title = match app.round.puzzle() {
        Puzzle::Daily { number, .. } => format!("WORDLE #{number} - Daily Puzzle"),
        Puzzle::FreePlay => "WORDLE - Free Play".to_string(),
    };
    if app.round.session().is_hard_mode() {
        title.push_str(" (Hard Mode)");
    }

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn turn_line(turn: &Turn) -> Line<'static> {
    let spans: Vec<Span> = turn
        .guess
        .text()
        .chars()
        .zip(turn.result.hints())
        .flat_map(|(c, &hint)| [Span::styled(format!(" {c} "), hint_style(hint)), Span::raw(" ")])
        .collect();
    Line::from(spans)
}

fn input_line(buffer: &str, active: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    let mut letters = buffer.chars();

    for i in 0..WORD_LENGTH {
        let cell = match letters.next() {
            Some(c) => Span::styled(
                format!(" {c} "),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            None if active && i == buffer.len() => Span::styled(" █ ", Style::default().fg(Color::White)),
            None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(cell);
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = app.round.session();
    let turns = session.turns();
    let guessing = app.input_mode == InputMode::Guessing;

    let mut lines: Vec<Line> = turns.iter().map(turn_line).collect();
    if guessing && turns.len() < TOTAL_GUESSES {
        lines.push(input_line(&app.input_buffer, true));
    }
    while lines.len() < TOTAL_GUESSES {
        lines.push(input_line("", false));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.round.session().keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|key| {
                    [
                        Span::styled(
                            format!(" {} ", char::from(key)),
                            hint_style(keyboard.hint(key)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(widget, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let session = app.round.session();
    let guesses_text = format!(
        "Guess {}/{TOTAL_GUESSES}",
        (session.guesses_used() + 1).min(TOTAL_GUESSES)
    );
    f.render_widget(
        Paragraph::new(guesses_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats = app.round.stats();
    let streak_text = format!("Streak: {} | Best: {}", stats.streak, stats.best_streak);
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Guessing => "Enter: Submit | Backspace: Delete | Esc: Give up",
        InputMode::GameOver => "Enter/q: Stats",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
