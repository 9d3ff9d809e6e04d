use crate::config::ResolverConfig;
use crate::error::{Result, ScheduleError};
use crate::output::write_week_schedule;
use crate::teams::abbreviation;
use crate::types::{ScheduleRow, WeekSchedule, Winner};
use chrono::{Datelike, NaiveDate};
use csv::StringRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const REQUIRED_COLUMNS: [&str; 6] = ["Week", "Date", "Winner/tie", "Loser/tie", "PtsW", "PtsL"];

/// Header given to the home/away marker column when the table was re-saved by another tool
const RESAVED_MARKER_COLUMN: &str = "Unnamed: 5";

/// One line of the season schedule, as found in the source table
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonGame {
    /// `None` for playoff labels and repeated header lines
    pub week: Option<u32>,
    pub date: String,
    pub winner: String,
    pub loser: String,
    pub pts_winner: Option<u32>,
    pub pts_loser: Option<u32>,
    /// The winner played on the road
    pub winner_away: bool,
}

/// Season schedule loaded from the source CSV
#[derive(Debug, Clone)]
pub struct SeasonSchedule {
    pub season_year: i32,
    pub games: Vec<SeasonGame>,
}

/// Column positions resolved from the header row
struct ColumnIndex {
    week: usize,
    date: usize,
    winner: usize,
    loser: usize,
    pts_winner: usize,
    pts_loser: usize,
    marker: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ScheduleError::MissingColumns(missing));
        }

        // Required columns were checked above
        let required = |name: &str| position(name).unwrap_or_default();
        let winner = required("Winner/tie");

        // The raw export leaves the marker column unnamed, right after the winner
        let marker = position(RESAVED_MARKER_COLUMN).or_else(|| {
            headers
                .get(winner + 1)
                .filter(|h| h.trim().is_empty())
                .map(|_| winner + 1)
        });

        Ok(Self {
            week: required("Week"),
            date: required("Date"),
            winner,
            loser: required("Loser/tie"),
            pts_winner: required("PtsW"),
            pts_loser: required("PtsL"),
            marker,
        })
    }
}

/// Read the season schedule table at `path`
pub fn load_season_schedule(path: &Path, season_year: i32) -> Result<SeasonSchedule> {
    info!("Reading season schedule from: {}", path.display());
    if !path.exists() {
        return Err(ScheduleError::MissingInput(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    debug!("Columns in schedule: {:?}", headers.iter().collect::<Vec<_>>());

    let columns = ColumnIndex::from_headers(&headers)?;

    let mut games = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cell = |index: usize| record.get(index).unwrap_or("").trim();

        games.push(SeasonGame {
            week: cell(columns.week).parse().ok(),
            date: cell(columns.date).to_string(),
            winner: cell(columns.winner).to_string(),
            loser: cell(columns.loser).to_string(),
            pts_winner: parse_points(cell(columns.pts_winner)),
            pts_loser: parse_points(cell(columns.pts_loser)),
            winner_away: columns.marker.map(cell) == Some("@"),
        });
    }

    info!("Loaded {} schedule lines", games.len());
    Ok(SeasonSchedule { season_year, games })
}

impl SeasonSchedule {
    /// Resolve the games of `week`, in schedule order
    ///
    /// Games whose home team has no known site code are skipped with a warning.
    pub fn resolve_week(&self, config: &ResolverConfig, week: u32) -> Vec<ScheduleRow> {
        let mut rows = Vec::new();

        for game in self.games.iter().filter(|g| g.week == Some(week)) {
            let (away_team, home_team) = if game.winner_away {
                (&game.winner, &game.loser)
            } else {
                (&game.loser, &game.winner)
            };

            let Some(date) = parse_game_date(&game.date, self.season_year) else {
                warn!("Skipping {} @ {}: unrecognised date '{}'", away_team, home_team, game.date);
                continue;
            };

            let Some(home_abbr) = abbreviation(home_team) else {
                warn!("Could not find abbreviation for team: {}", home_team);
                continue;
            };

            let (away_score, home_score, winner) = if game.winner_away {
                (game.pts_winner, game.pts_loser, Winner::Away)
            } else {
                (game.pts_loser, game.pts_winner, Winner::Home)
            };

            rows.push(ScheduleRow {
                week,
                date,
                away_team: away_team.clone(),
                home_team: home_team.clone(),
                away_score,
                home_score,
                winner,
                game_url: config.box_score_url(date, home_abbr),
            });
        }

        rows
    }
}

/// A resolved week together with the file it was written to
#[derive(Debug, Clone)]
pub struct ResolvedWeek {
    pub schedule: WeekSchedule,
    pub path: PathBuf,
}

/// Resolve one week and persist it as a dated CSV in `output_dir`
///
/// `schedule_csv` overrides the configured season schedule location.
pub fn resolve_week(
    config: &ResolverConfig,
    schedule_csv: Option<&Path>,
    output_dir: &Path,
    year: i32,
    week: u32,
) -> Result<ResolvedWeek> {
    let source = schedule_csv.map(Path::to_path_buf).unwrap_or_else(|| config.schedule_path(year));
    let season = load_season_schedule(&source, year)?;

    let games = season.resolve_week(config, week);
    if games.is_empty() {
        return Err(ScheduleError::NoGames { year, week });
    }

    let schedule = WeekSchedule::new(year, week, games);
    let run_date = chrono::Local::now().date_naive();
    let path = write_week_schedule(output_dir, &config.output_prefix, &schedule, run_date)?;

    info!("Schedule saved to {}", path.display());
    Ok(ResolvedWeek { schedule, path })
}

fn parse_points(raw: &str) -> Option<u32> {
    raw.parse::<u32>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|p| *p >= 0.0).map(|p| p as u32))
}

/// Parse a schedule date; `Month Day` dates belong to the season, which runs into February
fn parse_game_date(raw: &str, season_year: i32) -> Option<NaiveDate> {
    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    let date = NaiveDate::parse_from_str(&format!("{raw} {season_year}"), "%B %d %Y").ok()?;
    if date.month() <= 2 {
        date.with_year(season_year + 1)
    } else {
        Some(date)
    }
}
