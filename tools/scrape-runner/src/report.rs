//! Console summaries printed after each stage

use player_scraper::schema::header_of;
use player_scraper::{FetchedWeek, PlayerGameStat, Stat};
use schedule_resolver::{ResolvedWeek, Winner};

fn score(score: Option<u32>) -> String {
    score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Week table, totals and games per team
pub fn print_week_schedule(resolved: &ResolvedWeek) {
    let schedule = &resolved.schedule;

    println!(
        "{:<10} {:<24} {:<24} {:>5} {:>5} {:<6} URL",
        "Date", "Away Team", "Home Team", "Away", "Home", "Winner"
    );
    println!("{}", "-".repeat(110));
    for game in &schedule.games {
        let winner = match game.winner {
            Winner::Home => "Home",
            Winner::Away => "Away",
        };
        println!(
            "{:<10} {:<24} {:<24} {:>5} {:>5} {:<6} {}",
            game.date.format("%Y-%m-%d"),
            game.away_team,
            game.home_team,
            score(game.away_score),
            score(game.home_score),
            winner,
            game.game_url
        );
    }

    println!("\nTotal games: {}", schedule.len());
    if let Some((first, last)) = schedule.date_range() {
        println!("Date range: {} to {}", first, last);
    }

    println!("\nGames per team:");
    for (team, games) in schedule.games_per_team() {
        println!("  {:<24} {}", team, games);
    }
}

fn print_leaders(title: &str, leaders: &[&PlayerGameStat], stats: &[Stat]) {
    println!("\n{title}:");
    for player in leaders {
        let line: Vec<String> = stats
            .iter()
            .map(|s| format!("{} {}", header_of(*s), player.stats[*s]))
            .collect();
        println!(
            "  {:<10} {:<24} {:<4} {}",
            player.date.format("%Y-%m-%d"),
            player.player,
            player.team,
            line.join("  ")
        );
    }
}

/// Top fantasy scorers, team totals and yardage leaders
pub fn print_player_stats(fetched: &FetchedWeek) {
    let dataset = &fetched.dataset;

    println!(
        "\nScraped {} player lines from {} games ({} failed)",
        dataset.len(),
        fetched.games_scraped,
        fetched.games_failed
    );

    println!("\nTop 10 players by fantasy points:");
    println!("{:<4} {:<10} {:<24} {:<4} {:>8}", "Rank", "Date", "Player", "Team", "Points");
    println!("{}", "-".repeat(54));
    for (rank, player) in dataset.top_by_fantasy_points(10).iter().enumerate() {
        println!(
            "{:<4} {:<10} {:<24} {:<4} {:>8.2}",
            rank + 1,
            player.date.format("%Y-%m-%d"),
            player.player,
            player.team,
            player.fantasy_points
        );
    }

    println!("\nTotal fantasy points by team:");
    for (team, points) in dataset.team_totals() {
        println!("  {:<6} {:>8.2}", team, points);
    }

    print_leaders(
        "Top passers",
        &dataset.leaders(Stat::PassYds, 5),
        &[Stat::PassYds, Stat::PassTd, Stat::PassInt],
    );
    print_leaders(
        "Top rushers",
        &dataset.leaders(Stat::RushYds, 5),
        &[Stat::RushAtt, Stat::RushYds, Stat::RushTd],
    );
    print_leaders(
        "Top receivers",
        &dataset.leaders(Stat::RecYds, 5),
        &[Stat::RecTgt, Stat::RecRec, Stat::RecYds, Stat::RecTd],
    );
}
