//! Applies session outcomes to the stats record
//!
//! Saves happen at three checkpoints: the first accepted guess, the end of
//! the game, and abandonment.

use super::{GameStats, StatsError, StatsStore};
use crate::game::{GameSession, SessionStatus};
use chrono::NaiveDate;

/// Stats bookkeeping for one session
#[derive(Debug)]
pub struct Recorder {
    store: StatsStore,
    stats: GameStats,
    started: bool,
    finished: bool,
}

impl Recorder {
    #[must_use]
    pub const fn new(store: StatsStore, stats: GameStats) -> Self {
        Self {
            store,
            stats,
            started: false,
            finished: false,
        }
    }

    /// Remember that today's daily puzzle was handed out
    ///
    /// Persisted with the first-guess checkpoint, so quitting before any
    /// guess leaves the daily available.
    pub fn mark_daily(&mut self, today: NaiveDate) {
        self.stats.mark_daily(today);
    }

    /// Update stats after `session` accepted a guess
    ///
    /// # Errors
    /// Returns the save failure; the in-memory stats are updated regardless.
    pub fn guess_accepted(&mut self, session: &GameSession) -> Result<(), StatsError> {
        let mut dirty = false;

        if !self.started && session.guesses_used() > 0 {
            self.started = true;
            self.stats.record_start(session.is_hard_mode());
            dirty = true;
        }

        if !self.finished {
            match session.status() {
                SessionStatus::Won => {
                    self.stats
                        .record_win(session.is_hard_mode(), session.attempt());
                    self.finished = true;
                    dirty = true;
                }
                SessionStatus::Lost => {
                    self.stats.record_loss();
                    self.finished = true;
                    dirty = true;
                }
                SessionStatus::Active => {}
            }
        }

        if dirty {
            self.store.save(&self.stats)
        } else {
            Ok(())
        }
    }

    /// Treat an unfinished, started session as lost
    ///
    /// Safe to call any number of times. Returns whether anything was
    /// recorded.
    ///
    /// # Errors
    /// Returns the save failure; the session still counts as finished.
    pub fn abandon(&mut self) -> Result<bool, StatsError> {
        if self.finished || !self.started {
            return Ok(false);
        }

        self.finished = true;
        self.stats.record_loss();
        self.store.save(&self.stats)?;
        Ok(true)
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub const fn store(&self) -> &StatsStore {
        &self.store
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}
