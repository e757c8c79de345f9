//! Terminal output formatting
//!
//! Display utilities for line mode and the post-game report.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_reveal, print_share, print_stats, print_warning};
