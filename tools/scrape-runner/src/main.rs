//! NFL scrape CLI
//!
//! - run: resolve the week schedule, then scrape its box scores
//! - resolve: schedule stage only
//! - fetch: box-score stage only, from an existing week schedule file

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use player_scraper::HttpPageSource;
use scrape_runner::{initialize_logging, load_config, run_fetch, run_pipeline, run_resolve};
use tracing::error;

#[derive(Parser)]
#[command(name = "nfl-scrape")]
#[command(about = "Scrape an NFL week's schedule and box scores into fantasy-scored CSV files")]
#[command(version = "0.1.0")]
struct Cli {
    /// Season schedule CSV (defaults to the configured location for the year)
    #[arg(long, global = true)]
    schedule: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both stages for one week
    Run {
        /// Season year
        year: i32,

        /// Week number
        week: u32,

        /// Output directory
        #[arg(short, long, default_value = "output")]
        output: PathBuf,
    },

    /// Resolve the week schedule into a dated CSV
    Resolve {
        /// Output directory
        output_dir: PathBuf,

        /// Season year
        year: i32,

        /// Week number
        week: u32,
    },

    /// Scrape box scores for the latest week schedule in the output directory
    Fetch {
        /// Output directory holding the week schedule
        output_dir: PathBuf,

        /// Season year
        year: i32,

        /// Week number
        week: u32,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config();
    let level = match (&config, cli.verbose) {
        (_, true) => "debug",
        (Ok(config), false) => config.logging.level.as_str(),
        (Err(_), false) => "info",
    };
    initialize_logging(level)?;
    let config = config.context("Failed to load configuration")?;

    let schedule = cli.schedule.as_deref();

    match cli.command {
        Commands::Run { year, week, output } => {
            let source = HttpPageSource::new(&config.scraper).context("Failed to build HTTP client")?;
            run_pipeline(&config, schedule, source, &output, year, week).await?;
        }
        Commands::Resolve { output_dir, year, week } => {
            run_resolve(&config, schedule, &output_dir, year, week)?;
        }
        Commands::Fetch { output_dir, year, week } => {
            let source = HttpPageSource::new(&config.scraper).context("Failed to build HTTP client")?;
            run_fetch(&config, source, &output_dir, year, week).await?;
        }
    }

    Ok(())
}
