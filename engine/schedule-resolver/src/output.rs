//! Week-schedule files: naming, writing and reading back

use crate::error::Result;
use crate::types::{ScheduleRow, WeekSchedule};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// `<prefix>_<year>_week_<week>_<YYYYMMDD>.csv`
pub fn week_schedule_file_name(prefix: &str, year: i32, week: u32, run_date: NaiveDate) -> String {
    format!("{prefix}_{year}_week_{week}_{}.csv", run_date.format("%Y%m%d"))
}

/// Write the week schedule into `dir`, creating the directory if needed
pub fn write_week_schedule(
    dir: &Path,
    prefix: &str,
    schedule: &WeekSchedule,
    run_date: NaiveDate,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(week_schedule_file_name(prefix, schedule.year, schedule.week, run_date));

    let mut writer = csv::Writer::from_path(&path)?;
    for game in &schedule.games {
        writer.serialize(game)?;
    }
    writer.flush()?;

    Ok(path)
}

/// Most recently written week-schedule file for `year`/`week`, if any
pub fn latest_week_schedule(dir: &Path, prefix: &str, year: i32, week: u32) -> Result<Option<PathBuf>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    // The trailing underscore keeps week 1 from matching week 10
    let stem = format!("{prefix}_{year}_week_{week}_");
    let mut latest: Option<(SystemTime, PathBuf)> = None;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !name.starts_with(&stem) || !name.ends_with(".csv") {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        debug!("Candidate schedule file: {} ({:?})", name, modified);
        if latest.as_ref().map_or(true, |(t, _)| modified >= *t) {
            latest = Some((modified, entry.path()));
        }
    }

    Ok(latest.map(|(_, path)| path))
}

/// Read a week-schedule file written by [`write_week_schedule`]
pub fn read_week_schedule(path: &Path, week: u32) -> Result<Vec<ScheduleRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize::<ScheduleRow>() {
        let mut row = row?;
        row.week = week;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Winner;

    fn sample_schedule() -> WeekSchedule {
        WeekSchedule::new(
            2024,
            1,
            vec![ScheduleRow {
                week: 1,
                date: NaiveDate::from_ymd_opt(2024, 9, 5).unwrap(),
                away_team: "Baltimore Ravens".to_string(),
                home_team: "Kansas City Chiefs".to_string(),
                away_score: Some(20),
                home_score: None,
                winner: Winner::Home,
                game_url: "https://www.pro-football-reference.com/boxscores/202409050kan.htm"
                    .to_string(),
            }],
        )
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 10).unwrap();
        assert_eq!(
            week_schedule_file_name("nfl_schedule", 2024, 1, date),
            "nfl_schedule_2024_week_1_20240910.csv"
        );
    }

    #[test]
    fn test_written_header_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 9, 10).unwrap();
        let schedule = sample_schedule();

        let path = write_week_schedule(dir.path(), "nfl_schedule", &schedule, date).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents
            .starts_with("Date,Away Team,Home Team,Away Score,Home Score,Winner,Game URL\n"));
        assert!(contents.contains("2024-09-05,Baltimore Ravens,Kansas City Chiefs,20,,Home,"));

        let rows = read_week_schedule(&path, 1).unwrap();
        assert_eq!(rows, schedule.games);
    }

    #[test]
    fn test_latest_week_schedule_ignores_other_weeks() {
        let dir = tempfile::tempdir().unwrap();
        let schedule = sample_schedule();
        let date = NaiveDate::from_ymd_opt(2024, 9, 10).unwrap();
        write_week_schedule(dir.path(), "nfl_schedule", &schedule, date).unwrap();

        let week_ten = WeekSchedule::new(2024, 10, schedule.games.clone());
        write_week_schedule(dir.path(), "nfl_schedule", &week_ten, date).unwrap();

        let found = latest_week_schedule(dir.path(), "nfl_schedule", 2024, 1).unwrap().unwrap();
        assert_eq!(found.file_name().unwrap(), "nfl_schedule_2024_week_1_20240910.csv");

        assert!(latest_week_schedule(dir.path(), "nfl_schedule", 2024, 2).unwrap().is_none());
        assert!(latest_week_schedule(&dir.path().join("missing"), "nfl_schedule", 2024, 1)
            .unwrap()
            .is_none());
    }
}
