//! Formatting utilities for terminal output

use crate::core::TOTAL_GUESSES;
use crate::game::{GameSession, Puzzle, SessionStatus};

/// Longest histogram bar, in cells
pub const MAX_BAR_LENGTH: usize = 15;

/// Format a percentage with one decimal, dropping a trailing ".0"
#[must_use]
pub fn format_percentage(value: f64) -> String {
    let formatted = format!("{value:.1}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Bar for one histogram row, scaled so the largest count fills the width
#[must_use]
pub fn histogram_bar(count: u32, max_count: u32, width: usize) -> String {
    if max_count == 0 {
        return String::new();
    }
    let len = (count as usize * width / max_count as usize).min(width);
    "█".repeat(len)
}

/// Header line of the share grid, e.g. "Wordle 1042 3/6*"
#[must_use]
pub fn share_header(puzzle: Puzzle, session: &GameSession) -> String {
    let label = match puzzle {
        Puzzle::Daily { number, .. } => number.to_string(),
        Puzzle::FreePlay => "practice".to_string(),
    };
    let turn = match session.status() {
        SessionStatus::Won => (session.attempt() + 1).to_string(),
        SessionStatus::Lost | SessionStatus::Active => "X".to_string(),
    };
    let hard = if session.is_hard_mode() { "*" } else { "" };

    format!("Wordle {label} {turn}/{TOTAL_GUESSES}{hard}")
}

/// One emoji row per accepted guess
#[must_use]
pub fn share_grid(session: &GameSession) -> Vec<String> {
    session
        .turns()
        .iter()
        .map(|turn| turn.result.to_emoji())
        .collect()
}
