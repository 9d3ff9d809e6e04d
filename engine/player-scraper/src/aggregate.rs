//! Coercion, fantasy scoring and per-week aggregation

use crate::error::Result;
use crate::schema::{Field, Stat, OFFENSE_COLUMNS, SCORING_WEIGHTS};
use crate::types::{GameInfo, PlayerGameStat, RawPlayerRow, StatLine, TaggedRow};
use std::collections::HashMap;
use std::path::Path;

/// Integer coercion: decimals are truncated, anything non-numeric is 0
fn coerce_count(raw: &str) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>().unwrap_or_else(|_| {
        raw.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.trunc() as i64).unwrap_or(0)
    })
}

/// Float coercion: anything non-numeric is 0.0
fn coerce_rate(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// PPR fantasy points of a stat line
pub fn fantasy_points(stats: &StatLine) -> f64 {
    SCORING_WEIGHTS.iter().map(|(stat, weight)| stats[*stat] as f64 * weight).sum()
}

/// Coerce a raw row into a scored player stat for `game`
pub fn coerce_row(raw: &RawPlayerRow, game: &GameInfo) -> PlayerGameStat {
    let mut team = String::new();
    let mut stats = StatLine::default();

    for column in &OFFENSE_COLUMNS {
        let value = raw.get(column.header).unwrap_or(column.field.blank_default());
        match column.field {
            Field::Team => team = value.to_string(),
            Field::Count(stat) => stats[stat] = coerce_count(value),
            Field::PassRate => stats.pass_rate = coerce_rate(value),
        }
    }

    PlayerGameStat {
        player: raw.player.clone(),
        team,
        fantasy_points: fantasy_points(&stats),
        stats,
        date: game.date,
        away_team: game.away_team.clone(),
        home_team: game.home_team.clone(),
    }
}

/// Every player stat of one week
#[derive(Debug, Clone, Default)]
pub struct StatsDataset {
    pub stats: Vec<PlayerGameStat>,
}

impl StatsDataset {
    /// Coerce and score every tagged row, keeping their order
    pub fn from_rows(rows: &[TaggedRow]) -> Self {
        Self { stats: rows.iter().map(|t| coerce_row(&t.row, &t.game)).collect() }
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Highest fantasy scorers first; ties keep scrape order
    pub fn top_by_fantasy_points(&self, limit: usize) -> Vec<&PlayerGameStat> {
        let mut sorted: Vec<&PlayerGameStat> = self.stats.iter().collect();
        sorted.sort_by(|a, b| b.fantasy_points.total_cmp(&a.fantasy_points));
        sorted.truncate(limit);
        sorted
    }

    /// Leaders in a counting stat; ties keep scrape order
    pub fn leaders(&self, stat: Stat, limit: usize) -> Vec<&PlayerGameStat> {
        let mut sorted: Vec<&PlayerGameStat> = self.stats.iter().collect();
        sorted.sort_by(|a, b| b.stats[stat].cmp(&a.stats[stat]));
        sorted.truncate(limit);
        sorted
    }

    /// Total fantasy points per team, highest first
    pub fn team_totals(&self) -> Vec<(String, f64)> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for stat in &self.stats {
            *totals.entry(stat.team.as_str()).or_default() += stat.fantasy_points;
        }

        let mut totals: Vec<(String, f64)> =
            totals.into_iter().map(|(team, points)| (team.to_string(), points)).collect();
        totals.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        totals
    }

    /// Write one CSV line per player stat
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        let mut header = vec!["Player"];
        header.extend(OFFENSE_COLUMNS.iter().map(|c| c.header));
        header.extend(["Date", "Away Team", "Home Team", "FantasyPoints"]);
        writer.write_record(&header)?;

        for stat in &self.stats {
            let mut record = vec![stat.player.clone()];
            record.extend(OFFENSE_COLUMNS.iter().map(|column| match column.field {
                Field::Team => stat.team.clone(),
                Field::Count(s) => stat.stats[s].to_string(),
                Field::PassRate => stat.stats.pass_rate.to_string(),
            }));
            record.push(stat.date.format("%Y-%m-%d").to_string());
            record.push(stat.away_team.clone());
            record.push(stat.home_team.clone());
            record.push(format!("{:.2}", stat.fantasy_points));
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }
}
