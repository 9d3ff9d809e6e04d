use crate::client::PageSource;
use crate::error::Result;
use crate::parser::BoxScoreParser;
use crate::retry::{with_backoff, BackoffPolicy};
use crate::types::{GameInfo, RawPlayerRow, TaggedRow, WeekScrape};
use schedule_resolver::ScheduleRow;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// Pro-football-reference box-score scraper
///
/// Games are fetched one at a time; a randomized pause follows every game.
pub struct BoxScoreScraper<S> {
    source: S,
    parser: BoxScoreParser,
    policy: BackoffPolicy,
}

impl<S: PageSource> BoxScoreScraper<S> {
    pub fn new(source: S, policy: BackoffPolicy) -> Result<Self> {
        Ok(Self { source, parser: BoxScoreParser::new()?, policy })
    }

    /// Fetch and parse one game's offense table
    ///
    /// `None` when the fetch failed, retries ran out, or the page has no table.
    pub async fn scrape_game(&self, game: &ScheduleRow) -> Option<Vec<RawPlayerRow>> {
        let url = game.game_url.as_str();

        let html = match with_backoff(&self.policy, || self.source.fetch_page(url)).await {
            Ok(html) => html,
            Err(e) => {
                error!("Error retrieving page {}: {}", url, e);
                return None;
            }
        };

        let rows = self.parser.parse(&html, url);
        if rows.is_none() {
            warn!("No table found on page: {}", url);
        }
        rows
    }

    /// Scrape every game in order, tagging each player row with its game
    pub async fn scrape_week(&self, games: &[ScheduleRow]) -> WeekScrape {
        let mut scrape = WeekScrape::default();
        let total = games.len();

        for (index, game) in games.iter().enumerate() {
            info!(
                "Scraping data for game {} of {}: {} @ {} on {}...",
                index + 1,
                total,
                game.away_team,
                game.home_team,
                game.date
            );

            match self.scrape_game(game).await {
                Some(rows) if !rows.is_empty() => {
                    let info = GameInfo::from(game);
                    scrape.rows.extend(rows.into_iter().map(|row| TaggedRow { row, game: info.clone() }));
                    scrape.games_scraped += 1;
                    info!("Data scraped successfully for {} @ {}", game.away_team, game.home_team);
                }
                _ => {
                    scrape.games_failed += 1;
                    warn!("Failed to scrape data for {} @ {}", game.away_team, game.home_team);
                }
            }

            sleep(self.policy.pacing_delay()).await;
        }

        scrape
    }
}
