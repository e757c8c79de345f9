//! Persisted cross-session statistics

use crate::core::TOTAL_GUESSES;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate statistics kept between runs
///
/// Game counts and win histograms are split by mode; the streak is shared.
/// `wins[i]` counts games won on attempt `i` (zero-based).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub total_games: u32,
    pub total_hard_games: u32,
    pub wins: [u32; TOTAL_GUESSES],
    pub hard_wins: [u32; TOTAL_GUESSES],
    pub streak: u32,
    pub best_streak: u32,
    pub last_daily: Option<NaiveDate>,
    #[serde(rename = "experimental_emoji_support")]
    pub emoji_sharing: bool,
    pub default_hard_mode: bool,
}

impl GameStats {
    /// Count a game as played in the given mode
    pub fn record_start(&mut self, hard_mode: bool) {
        if hard_mode {
            self.total_hard_games += 1;
        } else {
            self.total_games += 1;
        }
    }

    /// Record a win on zero-based `attempt`
    ///
    /// Out-of-range attempts still extend the streak but touch no histogram.
    pub fn record_win(&mut self, hard_mode: bool, attempt: usize) {
        let wins = if hard_mode {
            &mut self.hard_wins
        } else {
            &mut self.wins
        };
        if let Some(slot) = wins.get_mut(attempt) {
            *slot += 1;
        }

        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);
    }

    pub fn record_loss(&mut self) {
        self.streak = 0;
    }

    #[must_use]
    pub const fn games_played(&self, hard_mode: bool) -> u32 {
        if hard_mode {
            self.total_hard_games
        } else {
            self.total_games
        }
    }

    #[must_use]
    pub const fn win_histogram(&self, hard_mode: bool) -> &[u32; TOTAL_GUESSES] {
        if hard_mode {
            &self.hard_wins
        } else {
            &self.wins
        }
    }

    #[must_use]
    pub fn games_won(&self, hard_mode: bool) -> u32 {
        self.win_histogram(hard_mode).iter().sum()
    }

    /// Percentage of started games that were won, 0 when none were played
    #[must_use]
    pub fn win_percentage(&self, hard_mode: bool) -> f64 {
        match self.games_played(hard_mode) {
            0 => 0.0,
            played => f64::from(self.games_won(hard_mode)) * 100.0 / f64::from(played),
        }
    }

    /// Whether a daily puzzle should be offered on `today` (UTC date)
    ///
    /// Calendar-day rule: one daily per UTC date, regardless of the hour it
    /// was last played.
    #[must_use]
    pub fn daily_available(&self, today: NaiveDate) -> bool {
        self.last_daily.is_none_or(|last| last < today)
    }

    pub fn mark_daily(&mut self, today: NaiveDate) {
        self.last_daily = Some(today);
    }
}
