use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for schedule resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Site root used to build box-score URLs
    pub base_url: String,

    /// Season schedule CSV; `{year}` is replaced by the season year
    pub schedule_csv: String,

    /// File name prefix of the week-schedule output
    pub output_prefix: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.pro-football-reference.com".to_string(),
            schedule_csv: "resources/nfl_schedule_{year}.csv".to_string(),
            output_prefix: "nfl_schedule".to_string(),
        }
    }
}

impl ResolverConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("NFL_SCRAPE_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(schedule_csv) = std::env::var("NFL_SCHEDULE_CSV") {
            config.schedule_csv = schedule_csv;
        }

        config
    }

    /// Path of the season schedule for a given year
    pub fn schedule_path(&self, year: i32) -> PathBuf {
        PathBuf::from(self.schedule_csv.replace("{year}", &year.to_string()))
    }

    /// Box-score page for a game played at `home_abbr` on `date`
    pub fn box_score_url(&self, date: chrono::NaiveDate, home_abbr: &str) -> String {
        format!(
            "{}/boxscores/{}0{}.htm",
            self.base_url.trim_end_matches('/'),
            date.format("%Y%m%d"),
            home_abbr
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_schedule_path_substitutes_year() {
        let config = ResolverConfig::default();
        assert_eq!(config.schedule_path(2024), PathBuf::from("resources/nfl_schedule_2024.csv"));
    }

    #[test]
    fn test_box_score_url() {
        let config = ResolverConfig { base_url: "https://example.test/".to_string(), ..Default::default() };
        let date = NaiveDate::from_ymd_opt(2024, 9, 5).unwrap();

        assert_eq!(config.box_score_url(date, "kan"), "https://example.test/boxscores/202409050kan.htm");
    }
}
