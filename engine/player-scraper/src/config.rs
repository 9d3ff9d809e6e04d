use crate::retry::BackoffPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the box-score scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// User-Agent sent with every request
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// File name prefix of the week-schedule files to read
    pub schedule_prefix: String,

    /// File name prefix of the player stats output
    pub output_prefix: String,

    /// Retry and pacing configuration
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Attempts per game while rate limited
    pub max_attempts: u32,

    /// First backoff delay in seconds, doubled on every attempt
    pub initial_delay_secs: u64,

    /// Lower bound of the pause between games, in seconds
    pub pacing_min_secs: f64,

    /// Upper bound of the pause between games, in seconds
    pub pacing_max_secs: f64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            request_timeout_secs: 10,
            schedule_prefix: "nfl_schedule".to_string(),
            output_prefix: "nfl_game_stats".to_string(),
            retry: RetryConfig::default(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_attempts: 5, initial_delay_secs: 1, pacing_min_secs: 3.0, pacing_max_secs: 7.0 }
    }
}

/// Negative, NaN and out-of-range values collapse to no pause
fn pacing_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or_default()
}

impl ScraperConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(user_agent) = std::env::var("NFL_SCRAPE_USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Ok(timeout) = std::env::var("NFL_SCRAPE_TIMEOUT_SECS") {
            config.request_timeout_secs = timeout.parse().unwrap_or(10);
        }

        if let Ok(retries) = std::env::var("NFL_SCRAPE_MAX_RETRIES") {
            config.retry.max_attempts = retries.parse().unwrap_or(5);
        }

        if let Ok(min) = std::env::var("NFL_SCRAPE_PACING_MIN_SECS") {
            config.retry.pacing_min_secs = min.parse().unwrap_or(3.0);
        }

        if let Ok(max) = std::env::var("NFL_SCRAPE_PACING_MAX_SECS") {
            config.retry.pacing_max_secs = max.parse().unwrap_or(7.0);
        }

        config
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn backoff_policy(&self) -> BackoffPolicy {
        BackoffPolicy::new(
            self.retry.max_attempts,
            Duration::from_secs(self.retry.initial_delay_secs),
            pacing_secs(self.retry.pacing_min_secs)..=pacing_secs(self.retry.pacing_max_secs),
        )
    }

    /// `<prefix>_<year>_week_<week>.csv`
    pub fn output_file_name(&self, year: i32, week: u32) -> String {
        format!("{}_{year}_week_{week}.csv", self.output_prefix)
    }
}
