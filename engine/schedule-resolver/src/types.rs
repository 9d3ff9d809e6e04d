use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which side of the game won (ties are reported as the home side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Home,
    Away,
}

/// One resolved game of the requested week
///
/// Serialized field order is the column order of the week-schedule file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Week number (implied by the file name, not stored as a column)
    #[serde(skip)]
    pub week: u32,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Away Team")]
    pub away_team: String,
    #[serde(rename = "Home Team")]
    pub home_team: String,
    /// Blank for games that have not been played yet
    #[serde(rename = "Away Score")]
    pub away_score: Option<u32>,
    #[serde(rename = "Home Score")]
    pub home_score: Option<u32>,
    #[serde(rename = "Winner")]
    pub winner: Winner,
    #[serde(rename = "Game URL")]
    pub game_url: String,
}

/// All resolved games of one season week
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSchedule {
    pub year: i32,
    pub week: u32,
    pub games: Vec<ScheduleRow>,
}

impl WeekSchedule {
    pub fn new(year: i32, week: u32, games: Vec<ScheduleRow>) -> Self {
        Self { year, week, games }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Earliest and latest game date of the week
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.games.iter().map(|g| g.date).min()?;
        let max = self.games.iter().map(|g| g.date).max()?;
        Some((min, max))
    }

    /// Games per team counting both home and away appearances,
    /// most games first, then alphabetical
    pub fn games_per_team(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for game in &self.games {
            *counts.entry(game.home_team.as_str()).or_default() += 1;
            *counts.entry(game.away_team.as_str()).or_default() += 1;
        }

        let mut counts: Vec<(String, usize)> =
            counts.into_iter().map(|(team, n)| (team.to_string(), n)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(day: u32, away: &str, home: &str) -> ScheduleRow {
        ScheduleRow {
            week: 1,
            date: NaiveDate::from_ymd_opt(2024, 9, day).unwrap(),
            away_team: away.to_string(),
            home_team: home.to_string(),
            away_score: Some(20),
            home_score: Some(27),
            winner: Winner::Home,
            game_url: String::new(),
        }
    }

    #[test]
    fn test_games_per_team_counts_home_and_away() {
        // A team appearing once at home and once away must total two
        let schedule = WeekSchedule::new(
            2024,
            1,
            vec![
                game(5, "Baltimore Ravens", "Kansas City Chiefs"),
                game(8, "Kansas City Chiefs", "Buffalo Bills"),
            ],
        );

        let counts = schedule.games_per_team();
        assert_eq!(counts[0], ("Kansas City Chiefs".to_string(), 2));
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[1], ("Baltimore Ravens".to_string(), 1));
        assert_eq!(counts[2], ("Buffalo Bills".to_string(), 1));
    }

    #[test]
    fn test_date_range() {
        let schedule = WeekSchedule::new(
            2024,
            1,
            vec![game(8, "A", "B"), game(5, "C", "D"), game(9, "E", "F")],
        );

        let (min, max) = schedule.date_range().unwrap();
        assert_eq!(min, NaiveDate::from_ymd_opt(2024, 9, 5).unwrap());
        assert_eq!(max, NaiveDate::from_ymd_opt(2024, 9, 9).unwrap());
        assert!(WeekSchedule::new(2024, 1, Vec::new()).date_range().is_none());
    }
}
