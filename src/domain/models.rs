use serde::Serialize;

/// One row of a stage sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// Rank as written in the sheet. Informational only.
    pub rank: i64,
    pub name: String,
    pub points: i64,
    /// Direct image URL, empty when the sheet has none
    pub photo_url: String,
}

impl PlayerRecord {
    pub fn has_photo(&self) -> bool {
        !self.photo_url.is_empty()
    }
}

/// A discovered stage sheet of a competition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRecord {
    pub id: String,
    pub name: String,
    pub sheet_name: String,
    pub players: Vec<PlayerRecord>,
}

impl StageRecord {
    pub fn new(competition: &str, index: usize, sheet_name: String, players: Vec<PlayerRecord>) -> Self {
        Self {
            id: stage_id(competition, index),
            name: stage_label(index),
            sheet_name,
            players,
        }
    }
}

/// Build the id of the stage at `index` (1-based)
pub fn stage_id(competition: &str, index: usize) -> String {
    format!("{}-etapa-{}", competition, index)
}

/// Display label with a two digit stage number
pub fn stage_label(index: usize) -> String {
    format!("Stage {:02}", index)
}

/// A leaderboard line produced by aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub name: String,
    pub total_points: i64,
    pub rank: u32,
}

/// What the viewer is currently looking at.
///
/// `stage` is `None` for the overall view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub competition: String,
    pub stage: Option<String>,
}

impl Selection {
    pub fn overall(competition: impl Into<String>) -> Self {
        Self {
            competition: competition.into(),
            stage: None,
        }
    }

    pub fn stage(competition: impl Into<String>, stage: impl Into<String>) -> Self {
        Self {
            competition: competition.into(),
            stage: Some(stage.into()),
        }
    }

    pub fn is_overall(&self) -> bool {
        self.stage.is_none()
    }
}

/// Stats shown under the overall leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSummary {
    pub active_players: usize,
    pub leaders: Vec<String>,
    pub leader_label: String,
    pub leaders_text: String,
    pub stages_completed: usize,
    pub latest_stage_label: String,
}

/// Gallery item for a single stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoEntry {
    pub name: String,
    pub photo_url: String,
}
