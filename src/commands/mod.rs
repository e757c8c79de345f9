//! Command implementations

pub mod prefs;
pub mod simple;
pub mod stats;

pub use prefs::{PrefsUpdate, run_prefs};
pub use simple::run_simple;
pub use stats::run_stats;
