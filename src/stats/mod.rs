//! Cross-session statistics
//!
//! The record itself, where it lives on disk, and how a session's outcome
//! is folded into it.

mod record;
mod recorder;
pub mod store;

pub use record::GameStats;
pub use recorder::Recorder;
pub use store::StatsStore;

use std::path::PathBuf;
use thiserror::Error;

/// Stats persistence failure; never fatal to a game
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("no home directory to keep stats in")]
    NoHomeDir,
    #[error("could not read stats from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stats in {} were unreadable and have been reset: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not save stats to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not encode stats for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
