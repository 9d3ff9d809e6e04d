//! Runner configuration management

use anyhow::{ensure, Result};
use player_scraper::ScraperConfig;
use schedule_resolver::ResolverConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main runner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Schedule resolution (stage 1)
    pub resolver: ResolverConfig,

    /// Box-score scraping (stage 2)
    pub scraper: ScraperConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

/// Load configuration from environment variables
pub fn load_config() -> Result<RunnerConfig> {
    let mut config = RunnerConfig {
        resolver: ResolverConfig::from_env(),
        scraper: ScraperConfig::from_env(),
        logging: LoggingConfig::default(),
    };

    if let Ok(level) = std::env::var("NFL_SCRAPE_LOG_LEVEL") {
        config.logging.level = level;
    }

    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration
pub fn validate_config(config: &RunnerConfig) -> Result<()> {
    let retry = &config.scraper.retry;
    ensure!(retry.max_attempts >= 1, "max_attempts must be at least 1");
    let pacing = [("pacing_min_secs", retry.pacing_min_secs), ("pacing_max_secs", retry.pacing_max_secs)];
    for (name, secs) in pacing {
        ensure!(
            Duration::try_from_secs_f64(secs).is_ok(),
            "{name} = {secs} is not a representable duration"
        );
    }
    ensure!(
        retry.pacing_min_secs >= 0.0 && retry.pacing_min_secs <= retry.pacing_max_secs,
        "pacing range {}..{} is invalid",
        retry.pacing_min_secs,
        retry.pacing_max_secs
    );
    ensure!(config.scraper.request_timeout_secs > 0, "request timeout must be positive");
    ensure!(!config.resolver.base_url.is_empty(), "base_url must not be empty");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RunnerConfig::default()).is_ok());
    }

    #[test]
    fn test_inverted_pacing_range_is_rejected() {
        let mut config = RunnerConfig::default();
        config.scraper.retry.pacing_min_secs = 8.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_unrepresentable_pacing_is_rejected() {
        for max in [f64::INFINITY, f64::NAN, 1e30] {
            let mut config = RunnerConfig::default();
            config.scraper.retry.pacing_max_secs = max;
            assert!(validate_config(&config).is_err(), "accepted pacing_max_secs = {max}");
        }

        let mut config = RunnerConfig::default();
        config.scraper.retry.pacing_min_secs = -1.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_attempts_is_rejected() {
        let mut config = RunnerConfig::default();
        config.scraper.retry.max_attempts = 0;
        assert!(validate_config(&config).is_err());
    }
}
