//! Stats-only command

use crate::output::{print_stats, print_warning};
use crate::stats::StatsStore;

/// Print stored stats without playing
pub fn run_stats(store: &StatsStore, hard_mode: bool) {
    let (stats, warning) = store.load();
    if let Some(warning) = warning {
        print_warning(&warning.to_string());
    }
    print_stats(&stats, hard_mode || stats.default_hard_mode);
}
