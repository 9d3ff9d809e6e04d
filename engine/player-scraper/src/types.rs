use crate::schema::Stat;
use chrono::NaiveDate;
use schedule_resolver::ScheduleRow;
use std::ops::{Index, IndexMut};

/// One player row as read from the box-score table, before coercion
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlayerRow {
    /// Player name from the row header cell
    pub player: String,
    /// Cell text in `OFFENSE_COLUMNS` order, blanks already replaced by their default
    pub cells: Vec<String>,
}

impl RawPlayerRow {
    /// Text bound to the column with the given header
    pub fn get(&self, header: &str) -> Option<&str> {
        crate::schema::OFFENSE_COLUMNS
            .iter()
            .position(|c| c.header == header)
            .and_then(|i| self.cells.get(i))
            .map(String::as_str)
    }
}

/// The game a row was scraped from
#[derive(Debug, Clone, PartialEq)]
pub struct GameInfo {
    pub date: NaiveDate,
    pub away_team: String,
    pub home_team: String,
}

impl From<&ScheduleRow> for GameInfo {
    fn from(row: &ScheduleRow) -> Self {
        Self { date: row.date, away_team: row.away_team.clone(), home_team: row.home_team.clone() }
    }
}

/// A raw row tagged with its game
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedRow {
    pub row: RawPlayerRow,
    pub game: GameInfo,
}

/// Numeric box-score line of one player
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatLine {
    pub counts: [i64; Stat::COUNT],
    pub pass_rate: f64,
}

impl Index<Stat> for StatLine {
    type Output = i64;

    fn index(&self, stat: Stat) -> &i64 {
        &self.counts[stat.index()]
    }
}

impl IndexMut<Stat> for StatLine {
    fn index_mut(&mut self, stat: Stat) -> &mut i64 {
        &mut self.counts[stat.index()]
    }
}

/// A player's offensive stats for one game
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerGameStat {
    /// Player name (e.g., "Patrick Mahomes")
    pub player: String,
    /// Site team code (e.g., "KAN")
    pub team: String,
    pub stats: StatLine,
    /// Game date
    pub date: NaiveDate,
    pub away_team: String,
    pub home_team: String,
    /// PPR fantasy points derived from `stats`
    pub fantasy_points: f64,
}

/// Outcome of scraping every game of a week
#[derive(Debug, Clone, Default)]
pub struct WeekScrape {
    pub rows: Vec<TaggedRow>,
    pub games_scraped: usize,
    pub games_failed: usize,
}
