//! Scrape Runner - batch driver for the NFL scrape pipeline
//!
//! Resolves one season week into a dated schedule file, then scrapes every
//! box score of that week into a scored player stats file. Each stage can
//! also be run on its own.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod report;

pub use config::{load_config, validate_config, LoggingConfig, RunnerConfig};
pub use logging::initialize_logging;
pub use pipeline::{run_fetch, run_pipeline, run_resolve, PipelineError};
