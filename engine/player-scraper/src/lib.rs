//! Player Scraper - NFL box-score offense stats and fantasy points
//!
//! Fetches each game of a resolved week from pro-football-reference, parses the
//! offense table into per-player rows and scores them for PPR fantasy leagues.
//! Requests go out one at a time with backoff on rate limiting and a randomized
//! pause between games.

pub mod aggregate;
pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod retry;
pub mod schema;
pub mod scraper;
pub mod stage;
pub mod types;


pub use aggregate::{coerce_row, fantasy_points, StatsDataset};
pub use client::{HttpPageSource, PageSource};
pub use config::{RetryConfig, ScraperConfig};
pub use error::{FetchError, Result, ScrapeError};
pub use parser::{parse_box_score, BoxScoreParser};
pub use retry::{with_backoff, BackoffPolicy};
pub use schema::{Stat, OFFENSE_COLUMNS};
pub use self::scraper::BoxScoreScraper;
pub use stage::{fetch_week, FetchedWeek};
pub use types::{GameInfo, PlayerGameStat, RawPlayerRow, StatLine, TaggedRow};
