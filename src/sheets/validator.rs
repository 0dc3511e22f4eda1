/// Header fragments that mark a per-player column
const PLAYER_COLUMN_MARKERS: [&str; 2] = ["player", "jogador"];

/// Check that parsed rows look like a stage sheet.
///
/// Needs a header plus at least one data row, and some header cell must
/// contain a player column marker (case-insensitive substring). Summary tabs
/// that share the spreadsheet have no such column.
pub fn is_valid_stage_sheet(rows: &[Vec<String>]) -> bool {
    if rows.len() < 2 {
        return false;
    }

    rows[0].iter().any(|cell| is_player_column(cell))
}

fn is_player_column(cell: &str) -> bool {
    let lower = cell.to_lowercase();
    PLAYER_COLUMN_MARKERS.iter().any(|marker| lower.contains(marker))
}
