//! Schedule Resolver - turns a season schedule into one week of box-score URLs
//!
//! Reads the season-long schedule table exported from pro-football-reference,
//! keeps the games of a single week, works out which side was at home and
//! builds the box-score URL for each game. The result is persisted as a dated
//! week-schedule CSV that the player scraper picks up.

pub mod config;
pub mod error;
pub mod output;
pub mod resolver;
pub mod teams;
pub mod types;

pub use config::ResolverConfig;
pub use error::{Result, ScheduleError};
pub use output::{latest_week_schedule, read_week_schedule, week_schedule_file_name, write_week_schedule};
pub use resolver::{load_season_schedule, resolve_week, ResolvedWeek, SeasonSchedule};
pub use teams::{abbreviation, TEAM_ABBREVIATIONS};
pub use types::{ScheduleRow, WeekSchedule, Winner};
