//! Stored preference updates

use crate::stats::{GameStats, StatsError, StatsStore};

/// Requested preference changes; `None` leaves a value as is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefsUpdate {
    pub emoji_sharing: Option<bool>,
    pub default_hard_mode: Option<bool>,
}

impl PrefsUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.emoji_sharing.is_none() && self.default_hard_mode.is_none()
    }

    pub fn apply(self, stats: &mut GameStats) {
        if let Some(emoji) = self.emoji_sharing {
            stats.emoji_sharing = emoji;
        }
        if let Some(hard) = self.default_hard_mode {
            stats.default_hard_mode = hard;
        }
    }
}

/// Apply `update` to the stored record and return the result
///
/// Nothing is written when the update is empty.
///
/// # Errors
///
/// Returns the save failure.
pub fn run_prefs(store: &StatsStore, update: PrefsUpdate) -> Result<GameStats, StatsError> {
    let (mut stats, warning) = store.load();
    if let Some(warning) = warning {
        crate::output::print_warning(&warning.to_string());
    }

    if !update.is_empty() {
        update.apply(&mut stats);
        store.save(&stats)?;
    }

    Ok(stats)
}
