//! Error types for the schedule resolver

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schedule operations
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors that abort schedule resolution
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The season schedule file does not exist
    #[error("Schedule file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// One or more required columns are absent from the header row
    #[error("Schedule is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// No game in the schedule matched the requested week
    #[error("No games found for season {year}, week {week}")]
    NoGames { year: i32, week: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ScheduleError {
    /// True when the failure comes from absent input rather than from bad data
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput(_) | Self::MissingColumns(_))
    }
}
