use serde::{Deserialize, Serialize};

use crate::domain::RankedEntry;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub competition: String,
    pub stage: Option<String>,
    pub points_label: &'static str,
    pub entries: Vec<RankedEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageListItem {
    pub id: String,
    pub name: String,
    pub sheet_name: String,
    pub player_count: usize,
}

#[derive(Deserialize)]
pub struct RankingParams {
    pub stage: Option<String>,
}

/// Column header for the points column of a leaderboard
pub fn points_label(stage: Option<&str>) -> &'static str {
    match stage {
        Some(_) => "Points",
        None => "Total",
    }
}
