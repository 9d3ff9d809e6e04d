//! Two-stage pipeline: resolve the week schedule, then scrape its box scores

use std::path::Path;

use player_scraper::{fetch_week, FetchedWeek, PageSource, ScrapeError};
use schedule_resolver::{resolve_week, ResolvedWeek, ScheduleError};
use thiserror::Error;
use tracing::info;

use crate::config::RunnerConfig;
use crate::report::{print_player_stats, print_week_schedule};

/// Failure of one pipeline stage
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Error scraping schedule: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Error scraping player stats: {0}")]
    PlayerStats(#[from] ScrapeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Stage 1: resolve the week and print its summary
pub fn run_resolve(
    config: &RunnerConfig,
    schedule_override: Option<&Path>,
    output_dir: &Path,
    year: i32,
    week: u32,
) -> Result<ResolvedWeek> {
    let resolved = resolve_week(&config.resolver, schedule_override, output_dir, year, week)?;
    print_week_schedule(&resolved);
    Ok(resolved)
}

/// Stage 2: scrape the latest week schedule in `output_dir` and print its summary
pub async fn run_fetch<S: PageSource>(
    config: &RunnerConfig,
    source: S,
    output_dir: &Path,
    year: i32,
    week: u32,
) -> Result<FetchedWeek> {
    let fetched = fetch_week(&config.scraper, source, output_dir, year, week).await?;
    print_player_stats(&fetched);
    Ok(fetched)
}

/// Run both stages in order; the fetch stage never starts if resolution fails
pub async fn run_pipeline<S: PageSource>(
    config: &RunnerConfig,
    schedule_override: Option<&Path>,
    source: S,
    output_dir: &Path,
    year: i32,
    week: u32,
) -> Result<FetchedWeek> {
    std::fs::create_dir_all(output_dir)?;

    println!("Starting NFL data scraping for {year} Week {week}");
    println!("Output directory: {}", output_dir.display());

    println!("\nStep 1: Scraping schedule...");
    let resolved = run_resolve(config, schedule_override, output_dir, year, week)?;
    info!("Resolved {} games into {}", resolved.schedule.len(), resolved.path.display());

    println!("\nStep 2: Scraping player stats...");
    let fetched = run_fetch(config, source, output_dir, year, week).await?;

    println!("\nScraping completed successfully!");
    println!("Check the {} directory for the output files.", output_dir.display());
    Ok(fetched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use player_scraper::FetchError;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const GAME: &str = include_str!("../../../engine/player-scraper/tests/fixtures/game1.html");

    const SEASON: &str = "\
Week,Day,Date,Time,Winner/tie,,Loser/tie,,PtsW,PtsL,YdsW,TOW,YdsL,TOL
1,Thu,2024-09-05,8:20PM,Kansas City Chiefs,,Baltimore Ravens,boxscore,27,20,353,1,452,1
";

    /// Answers every URL with the same page
    struct OnePage {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PageSource for OnePage {
        async fn fetch_page(&self, _url: &str) -> std::result::Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(GAME.to_string())
        }
    }

    #[tokio::test]
    async fn test_missing_season_schedule_stops_before_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let source = OnePage { calls: AtomicUsize::new(0) };
        let missing = dir.path().join("nope.csv");

        let err = run_pipeline(&RunnerConfig::default(), Some(&missing), &source, dir.path(), 2024, 1)
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Schedule(ScheduleError::MissingInput(_))));
        assert!(err.to_string().starts_with("Error scraping schedule:"));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pipeline_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output");
        let mut season = tempfile::NamedTempFile::new().unwrap();
        season.write_all(SEASON.as_bytes()).unwrap();

        let source = OnePage { calls: AtomicUsize::new(0) };
        let fetched =
            run_pipeline(&RunnerConfig::default(), Some(season.path()), &source, &output, 2024, 1)
                .await
                .unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(fetched.games_scraped, 1);
        assert_eq!(fetched.dataset.len(), 5);
        assert!(fetched.schedule_path.starts_with(&output));
        assert!(output.join("nfl_game_stats_2024_week_1.csv").exists());
    }

    #[tokio::test]
    async fn test_fetch_without_schedule_is_a_stats_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = OnePage { calls: AtomicUsize::new(0) };

        let err = run_fetch(&RunnerConfig::default(), &source, dir.path(), 2024, 1).await.unwrap_err();

        assert!(matches!(err, PipelineError::PlayerStats(ScrapeError::MissingSchedule { .. })));
    }
}
