pub mod models;

pub use models::{
    LeaderboardSummary, PhotoEntry, PlayerRecord, RankedEntry, Selection, StageRecord, stage_id,
    stage_label,
};
