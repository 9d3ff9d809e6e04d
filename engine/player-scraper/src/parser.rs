use crate::error::{Result, ScrapeError};
use crate::schema::{MIN_CELLS, OFFENSE_COLUMNS, OFFENSE_TABLE_ID};
use crate::types::RawPlayerRow;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// Parser for the offense table of a box-score page
pub struct BoxScoreParser {
    table: Selector,
    row: Selector,
    column_header: Selector,
    player: Selector,
    cell: Selector,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e}")))
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

impl BoxScoreParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: selector(&format!("table#{OFFENSE_TABLE_ID}"))?,
            row: selector("tr")?,
            column_header: selector(r#"th[scope="col"]"#)?,
            player: selector(r#"th[data-stat="player"]"#)?,
            cell: selector("td, th")?,
        })
    }

    /// Player rows of the offense table, or `None` when the page has no such table
    ///
    /// Header rows are ignored, as are rows without a player cell. Rows with
    /// fewer than [`MIN_CELLS`] cells are skipped with a warning.
    pub fn parse(&self, html: &str, source: &str) -> Option<Vec<RawPlayerRow>> {
        let document = Html::parse_document(html);
        let table = document.select(&self.table).next()?;

        let mut rows = Vec::new();
        for row in table.select(&self.row) {
            if row.select(&self.column_header).next().is_some() {
                continue;
            }

            let Some(player_cell) = row.select(&self.player).next() else {
                continue;
            };
            let player = cell_text(&player_cell);

            let cells: Vec<ElementRef> = row.select(&self.cell).collect();
            if cells.len() < MIN_CELLS {
                warn!(
                    "Unexpected number of columns ({}) for player {} on page {}",
                    cells.len(),
                    player,
                    source
                );
                continue;
            }

            let values = OFFENSE_COLUMNS
                .iter()
                .map(|column| {
                    let text = cell_text(&cells[column.cell]);
                    if text.is_empty() {
                        column.field.blank_default().to_string()
                    } else {
                        text
                    }
                })
                .collect();

            rows.push(RawPlayerRow { player, cells: values });
        }

        Some(rows)
    }
}

/// Parse a box-score page with a one-off parser
pub fn parse_box_score(html: &str) -> Result<Option<Vec<RawPlayerRow>>> {
    Ok(BoxScoreParser::new()?.parse(html, "<inline>"))
}
