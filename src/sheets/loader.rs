use anyhow::Result;
use log::debug;
use std::sync::Arc;

use crate::domain::PlayerRecord;
use crate::parsing::{PhotoLinks, parse_csv};
use crate::sheets::source::{SheetSource, looks_like_html};
use crate::sheets::validator::is_valid_stage_sheet;

const RANK_COLUMN: usize = 0;
const NAME_COLUMN: usize = 1;
const POINTS_COLUMN: usize = 2;
const PHOTO_COLUMN: usize = 4;

/// Largest magnitude accepted from a numeric cell
const CELL_LIMIT: i64 = i32::MAX as i64;

/// Loads one stage tab and turns it into player records
pub struct SheetLoader {
    source: Arc<dyn SheetSource>,
    photo_links: PhotoLinks,
    sheet_prefix: String,
}

impl SheetLoader {
    pub fn new(source: Arc<dyn SheetSource>, sheet_prefix: impl Into<String>) -> Result<Self> {
        Ok(Self {
            source,
            photo_links: PhotoLinks::new()?,
            sheet_prefix: sheet_prefix.into(),
        })
    }

    /// Tab name for the stage at `index` (1-based)
    pub fn sheet_name(&self, index: usize) -> String {
        format!("{}{}", self.sheet_prefix, index)
    }

    /// Load the players of stage `index`.
    ///
    /// `Ok(None)` when there is no usable stage sheet at that index.
    pub async fn load_stage(&self, spreadsheet_id: &str, index: usize) -> Result<Option<Vec<PlayerRecord>>> {
        let sheet_name = self.sheet_name(index);
        self.load_sheet(spreadsheet_id, &sheet_name).await
    }

    async fn load_sheet(&self, spreadsheet_id: &str, sheet_name: &str) -> Result<Option<Vec<PlayerRecord>>> {
        let Some(text) = self.source.fetch_sheet_text(spreadsheet_id, sheet_name).await? else {
            return Ok(None);
        };

        if looks_like_html(&text) {
            return Ok(None);
        }

        let rows = parse_csv(&text);
        if !is_valid_stage_sheet(&rows) {
            debug!("Sheet {} is not a stage sheet ({} rows)", sheet_name, rows.len());
            return Ok(None);
        }

        Ok(Some(self.parse_players(&rows)))
    }

    /// Convert data rows (header excluded) into player records
    pub fn parse_players(&self, rows: &[Vec<String>]) -> Vec<PlayerRecord> {
        rows.iter()
            .skip(1)
            .map(|row| self.parse_player(row))
            .filter(|player| !player.name.is_empty())
            .collect()
    }

    fn parse_player(&self, row: &[String]) -> PlayerRecord {
        PlayerRecord {
            rank: parse_leading_int(cell(row, RANK_COLUMN)),
            name: cell(row, NAME_COLUMN).trim().to_string(),
            points: parse_leading_int(cell(row, POINTS_COLUMN)).max(0),
            photo_url: self.photo_links.normalize(cell(row, PHOTO_COLUMN)),
        }
    }
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Lenient integer parse: optional sign then leading digits, trailing text
/// ignored. Anything without leading digits is 0, and the result is capped
/// to `±CELL_LIMIT`.
pub fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }

    let value = digits.parse::<i64>().unwrap_or(CELL_LIMIT).min(CELL_LIMIT);
    if negative { -value } else { value }
}
