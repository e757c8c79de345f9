//! Stats file persistence
//!
//! The record is JSON in `~/.wordle`. Reads fall back to defaults, writes go
//! to a sibling temp file that is renamed over the record.

use super::{GameStats, StatsError};
use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name of the record inside the home directory
pub const STATS_FILE_NAME: &str = ".wordle";

/// Location of the stats record
///
/// A store without a path (no home directory) loads defaults and fails every
/// save with `StatsError::NoHomeDir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsStore {
    path: Option<PathBuf>,
}

impl StatsStore {
    /// Store backed by an explicit file
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store in the user's home directory
    #[must_use]
    pub fn in_home() -> Self {
        Self {
            path: dirs::home_dir().map(|home| home.join(STATS_FILE_NAME)),
        }
    }

    /// Explicit path if given, home directory otherwise
    #[must_use]
    pub fn locate(path: Option<PathBuf>) -> Self {
        path.map_or_else(Self::in_home, Self::at)
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the record, falling back to defaults
    ///
    /// A missing record is not an error. An unreadable record is reported and
    /// left alone; an unparsable one is reported and deleted.
    #[must_use]
    pub fn load(&self) -> (GameStats, Option<StatsError>) {
        match self.try_load() {
            Ok(stats) => (stats.unwrap_or_default(), None),
            Err(err) => {
                if let (StatsError::Corrupt { .. }, Some(path)) = (&err, &self.path) {
                    // Best effort: the next save replaces it anyway
                    let _ = fs::remove_file(path);
                }
                (GameStats::default(), Some(err))
            }
        }
    }

    /// Load the record without any fallback
    ///
    /// # Errors
    /// Returns `StatsError::Read` or `StatsError::Corrupt`.
    pub fn try_load(&self) -> Result<Option<GameStats>, StatsError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StatsError::Read {
                    path: path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(|source| StatsError::Corrupt {
                path: path.clone(),
                source,
            })
    }

    /// Replace the record with `stats`
    ///
    /// # Errors
    /// Returns `StatsError::NoHomeDir`, `StatsError::Write` or
    /// `StatsError::Encode`; the previous record is intact in every case.
    pub fn save(&self, stats: &GameStats) -> Result<(), StatsError> {
        let path = self.path.as_ref().ok_or(StatsError::NoHomeDir)?;
        let tmp = temp_path(path);

        let write_err = |source| StatsError::Write {
            path: path.clone(),
            source,
        };

        let file = fs::File::create(&tmp).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        if let Err(source) = serde_json::to_writer_pretty(&mut writer, stats) {
            let _ = fs::remove_file(&tmp);
            return Err(StatsError::Encode {
                path: path.clone(),
                source,
            });
        }

        let synced = writer
            .flush()
            .and_then(|()| writer.get_ref().sync_all());
        drop(writer);

        if let Err(source) = synced.and_then(|()| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(source));
        }

        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map_or_else(|| STATS_FILE_NAME.into(), ToOwned::to_owned);
    name.push(".tmp");
    path.with_file_name(name)
}
