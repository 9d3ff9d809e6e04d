//! Error types for the player scraper

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fetch-stage operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Why a single game page could not be fetched. Never fatal to a run.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP 429; retried with backoff
    #[error("Rate limited")]
    RateLimited,

    /// Any other non-success status
    #[error("HTTP error: {0}")]
    Http(StatusCode),

    /// Timeout, connection failure, unreadable body
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Max retries reached after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}

impl FetchError {
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::TOO_MANY_REQUESTS {
            Self::RateLimited
        } else {
            Self::Http(status)
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}

/// Errors that fail the fetch stage as a whole
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The resolver has not produced a schedule for this week
    #[error("No schedule file found for year {year}, week {week} in {}", dir.display())]
    MissingSchedule { dir: PathBuf, year: i32, week: u32 },

    /// Every game failed or returned no rows
    #[error("No data was scraped. Check if the URLs are correct and if the website structure has changed.")]
    NoData,

    #[error("Invalid selector '{0}'")]
    Selector(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Schedule error: {0}")]
    Schedule(#[from] schedule_resolver::ScheduleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    /// True when the stage failed because its input is absent
    pub fn is_missing_input(&self) -> bool {
        match self {
            Self::MissingSchedule { .. } => true,
            Self::Schedule(e) => e.is_missing_input(),
            _ => false,
        }
    }
}
