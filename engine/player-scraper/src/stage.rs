use crate::aggregate::StatsDataset;
use crate::client::PageSource;
use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::scraper::BoxScoreScraper;
use schedule_resolver::{latest_week_schedule, read_week_schedule};
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of the fetch stage for one week
#[derive(Debug, Clone)]
pub struct FetchedWeek {
    pub dataset: StatsDataset,
    pub path: PathBuf,
    pub schedule_path: PathBuf,
    pub games_scraped: usize,
    pub games_failed: usize,
}

/// Fetch stage: scrape every game of the latest week schedule in `output_dir`
/// and write the scored player stats next to it
pub async fn fetch_week<S: PageSource>(
    config: &ScraperConfig,
    source: S,
    output_dir: &Path,
    year: i32,
    week: u32,
) -> Result<FetchedWeek> {
    let schedule_path = latest_week_schedule(output_dir, &config.schedule_prefix, year, week)?
        .ok_or_else(|| ScrapeError::MissingSchedule { dir: output_dir.to_path_buf(), year, week })?;
    info!("Using schedule file: {}", schedule_path.display());

    let games = read_week_schedule(&schedule_path, week)?;

    let scraper = BoxScoreScraper::new(source, config.backoff_policy())?;
    let scrape = scraper.scrape_week(&games).await;
    if scrape.rows.is_empty() {
        return Err(ScrapeError::NoData);
    }

    let dataset = StatsDataset::from_rows(&scrape.rows);
    let path = output_dir.join(config.output_file_name(year, week));
    dataset.write_csv(&path)?;
    info!("Data saved to {}", path.display());

    Ok(FetchedWeek {
        dataset,
        path,
        schedule_path,
        games_scraped: scrape.games_scraped,
        games_failed: scrape.games_failed,
    })
}
