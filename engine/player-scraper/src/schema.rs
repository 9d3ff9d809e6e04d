//! Positional layout of the box-score offense table
//!
//! The site gives its cells no stable names we can rely on across seasons, so
//! each stat is bound to a cell offset. Every offset, CSV header and coercion
//! rule lives in [`OFFENSE_COLUMNS`]; a layout change is one edit there.

/// Integer counting stats, in box-score order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    PassCmp,
    PassAtt,
    PassYds,
    PassTd,
    PassInt,
    PassSacks,
    PassSackYds,
    PassLng,
    RushAtt,
    RushYds,
    RushTd,
    RushLng,
    RecTgt,
    RecRec,
    RecYds,
    RecTd,
    RecLng,
    Fumbles,
    FumblesLost,
}

impl Stat {
    pub const COUNT: usize = 19;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Where a cell's value ends up, which also fixes how it is coerced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Free text, kept as-is (blank stays blank)
    Team,
    /// Integer; blank or non-numeric becomes 0
    Count(Stat),
    /// Passer rating; blank or non-numeric becomes 0.0
    PassRate,
}

impl Field {
    /// Text substituted for a blank cell before coercion
    pub fn blank_default(self) -> &'static str {
        match self {
            Field::Team => "",
            Field::Count(_) | Field::PassRate => "0",
        }
    }
}

/// One bound cell of a player row
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub cell: usize,
    pub header: &'static str,
    pub field: Field,
}

const fn column(cell: usize, header: &'static str, field: Field) -> Column {
    Column { cell, header, field }
}

/// Table id of the offense box score
pub const OFFENSE_TABLE_ID: &str = "player_offense";

/// Rows with fewer cells than this are treated as layout drift and skipped
pub const MIN_CELLS: usize = 22;

pub const OFFENSE_COLUMNS: [Column; 21] = [
    column(1, "Team", Field::Team),
    column(2, "Pass_Cmp", Field::Count(Stat::PassCmp)),
    column(3, "Pass_Att", Field::Count(Stat::PassAtt)),
    column(4, "Pass_Yds", Field::Count(Stat::PassYds)),
    column(5, "Pass_TD", Field::Count(Stat::PassTd)),
    column(6, "Pass_Int", Field::Count(Stat::PassInt)),
    column(7, "Pass_Sacks", Field::Count(Stat::PassSacks)),
    column(8, "Pass_Sack_Yds", Field::Count(Stat::PassSackYds)),
    column(9, "Pass_Lng", Field::Count(Stat::PassLng)),
    column(10, "Pass_Rate", Field::PassRate),
    column(11, "Rush_Att", Field::Count(Stat::RushAtt)),
    column(12, "Rush_Yds", Field::Count(Stat::RushYds)),
    column(13, "Rush_TD", Field::Count(Stat::RushTd)),
    column(14, "Rush_Lng", Field::Count(Stat::RushLng)),
    column(15, "Rec_Tgt", Field::Count(Stat::RecTgt)),
    column(16, "Rec_Rec", Field::Count(Stat::RecRec)),
    column(17, "Rec_Yds", Field::Count(Stat::RecYds)),
    column(18, "Rec_TD", Field::Count(Stat::RecTd)),
    column(19, "Rec_Lng", Field::Count(Stat::RecLng)),
    column(20, "Fumbles", Field::Count(Stat::Fumbles)),
    column(21, "Fumbles_Lost", Field::Count(Stat::FumblesLost)),
];

/// Points per unit of each scoring stat (PPR)
pub const SCORING_WEIGHTS: [(Stat, f64); 9] = [
    (Stat::PassYds, 0.04),
    (Stat::PassTd, 4.0),
    (Stat::PassInt, -2.0),
    (Stat::RushYds, 0.1),
    (Stat::RushTd, 6.0),
    (Stat::RecRec, 1.0),
    (Stat::RecYds, 0.1),
    (Stat::RecTd, 6.0),
    (Stat::FumblesLost, -2.0),
];

/// CSV header of a counting stat
pub fn header_of(stat: Stat) -> &'static str {
    OFFENSE_COLUMNS
        .iter()
        .find(|c| c.field == Field::Count(stat))
        .map(|c| c.header)
        .unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_layout_covers_cells_one_through_twenty_one() {
        let cells: Vec<usize> = OFFENSE_COLUMNS.iter().map(|c| c.cell).collect();
        assert_eq!(cells, (1..=21).collect::<Vec<_>>());
        assert!(OFFENSE_COLUMNS.iter().all(|c| c.cell < MIN_CELLS));
    }

    #[test]
    fn test_every_stat_bound_once() {
        let bound: HashSet<usize> = OFFENSE_COLUMNS
            .iter()
            .filter_map(|c| match c.field {
                Field::Count(stat) => Some(stat.index()),
                _ => None,
            })
            .collect();
        assert_eq!(bound.len(), Stat::COUNT);
        assert_eq!(Stat::FumblesLost.index(), Stat::COUNT - 1);
    }

    #[test]
    fn test_header_of() {
        assert_eq!(header_of(Stat::PassYds), "Pass_Yds");
        assert_eq!(header_of(Stat::RecRec), "Rec_Rec");
    }
}
