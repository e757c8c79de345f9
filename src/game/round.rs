//! One game from target selection to recorded outcome
//!
//! Ties a `GameSession` to the dictionary that gates it and the stats
//! recorder that persists it. Both front ends drive a `Round`.

use super::{GameSession, GuessError, SessionStatus, Turn, WordSelector, selector};
use crate::stats::{GameStats, Recorder, StatsError};
use crate::wordlists::Dictionary;
use chrono::NaiveDate;
use rand::Rng;

/// Resolved settings for a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub hard_mode: bool,
    /// Skip the daily puzzle even when one is available
    pub free_play: bool,
}

impl GameConfig {
    /// Combine command-line flags with stored preferences
    #[must_use]
    pub const fn resolve(hard_flag: bool, free_play: bool, stats: &GameStats) -> Self {
        Self {
            hard_mode: hard_flag || stats.default_hard_mode,
            free_play,
        }
    }
}

/// Which kind of puzzle is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    Daily { number: i64, date: NaiveDate },
    FreePlay,
}

/// An accepted guess plus anything the player should be warned about
#[derive(Debug)]
pub struct Submission {
    pub turn: Turn,
    pub status: SessionStatus,
    pub warning: Option<StatsError>,
}

#[derive(Debug)]
pub struct Round {
    session: GameSession,
    dictionary: Dictionary,
    recorder: Recorder,
    puzzle: Puzzle,
}

impl Round {
    /// Pick the target and set up the session
    ///
    /// The daily puzzle is used when stats allow one for `today` and free
    /// play was not requested; otherwise a word is drawn from `rng`.
    pub fn start<R: Rng + ?Sized>(
        config: GameConfig,
        selector: &WordSelector,
        dictionary: Dictionary,
        mut recorder: Recorder,
        today: NaiveDate,
        rng: &mut R,
    ) -> Self {
        let daily = !config.free_play && recorder.stats().daily_available(today);

        let (target, puzzle) = if daily {
            recorder.mark_daily(today);
            let puzzle = Puzzle::Daily {
                number: selector::day_offset_for_date(today),
                date: today,
            };
            (selector.select_daily(today).clone(), puzzle)
        } else {
            (selector.select_random(rng).clone(), Puzzle::FreePlay)
        };

        Self {
            session: GameSession::new(target, config.hard_mode),
            dictionary,
            recorder,
            puzzle,
        }
    }

    /// Submit a guess and record stats checkpoints
    ///
    /// # Errors
    /// Returns the rejection reason; nothing is recorded in that case.
    pub fn submit(&mut self, guess: &str) -> Result<Submission, GuessError> {
        let turn = self.session.submit(guess, &self.dictionary)?.clone();
        let warning = self.recorder.guess_accepted(&self.session).err();

        Ok(Submission {
            turn,
            status: self.session.status(),
            warning,
        })
    }

    /// Finalize an interrupted game
    ///
    /// Idempotent; a no-op before the first accepted guess or after the game
    /// ended.
    ///
    /// # Errors
    /// Returns the save failure.
    pub fn abandon(&mut self) -> Result<bool, StatsError> {
        self.recorder.abandon()
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn puzzle(&self) -> Puzzle {
        self.puzzle
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        self.recorder.stats()
    }

    #[must_use]
    pub const fn is_daily(&self) -> bool {
        matches!(self.puzzle, Puzzle::Daily { .. })
    }
}
