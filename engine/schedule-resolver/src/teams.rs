//! Franchise names to the three-letter codes used in box-score URLs

/// The site's codes follow franchise history, not current city names
/// (e.g. the Ravens are `rav`, the Titans `oti`).
pub const TEAM_ABBREVIATIONS: [(&str, &str); 32] = [
    ("Arizona Cardinals", "crd"),
    ("Atlanta Falcons", "atl"),
    ("Baltimore Ravens", "rav"),
    ("Buffalo Bills", "buf"),
    ("Carolina Panthers", "car"),
    ("Chicago Bears", "chi"),
    ("Cincinnati Bengals", "cin"),
    ("Cleveland Browns", "cle"),
    ("Dallas Cowboys", "dal"),
    ("Denver Broncos", "den"),
    ("Detroit Lions", "det"),
    ("Green Bay Packers", "gnb"),
    ("Houston Texans", "htx"),
    ("Indianapolis Colts", "clt"),
    ("Jacksonville Jaguars", "jax"),
    ("Kansas City Chiefs", "kan"),
    ("Las Vegas Raiders", "rai"),
    ("Los Angeles Chargers", "sdg"),
    ("Los Angeles Rams", "ram"),
    ("Miami Dolphins", "mia"),
    ("Minnesota Vikings", "min"),
    ("New England Patriots", "nwe"),
    ("New Orleans Saints", "nor"),
    ("New York Giants", "nyg"),
    ("New York Jets", "nyj"),
    ("Philadelphia Eagles", "phi"),
    ("Pittsburgh Steelers", "pit"),
    ("San Francisco 49ers", "sfo"),
    ("Seattle Seahawks", "sea"),
    ("Tampa Bay Buccaneers", "tam"),
    ("Tennessee Titans", "oti"),
    ("Washington Commanders", "was"),
];

/// Look up the site code for a full team name
pub fn abbreviation(team: &str) -> Option<&'static str> {
    TEAM_ABBREVIATIONS
        .iter()
        .find(|(name, _)| *name == team)
        .map(|(_, abbr)| *abbr)
}
