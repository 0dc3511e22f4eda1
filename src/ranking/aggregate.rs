use std::collections::HashMap;

use crate::domain::{RankedEntry, StageRecord};

/// Stages that feed a ranking: the one named by `stage_filter`, or all of them
pub fn select_stages<'a>(stages: &'a [StageRecord], stage_filter: Option<&str>) -> Vec<&'a StageRecord> {
    match stage_filter {
        Some(id) => stages.iter().filter(|stage| stage.id == id).collect(),
        None => stages.iter().collect(),
    }
}

/// Build the leaderboard for the selected stages.
///
/// Points are summed per player name. Entries are ordered by total, highest
/// first; equal totals keep the order in which the players first appeared.
pub fn aggregate(stages: &[StageRecord], stage_filter: Option<&str>) -> Vec<RankedEntry> {
    let mut totals: Vec<(String, i64)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for stage in select_stages(stages, stage_filter) {
        for player in &stage.players {
            match positions.get(player.name.as_str()) {
                Some(&pos) => {
                    let total = &mut totals[pos].1;
                    *total = total.saturating_add(player.points);
                }
                None => {
                    positions.insert(player.name.as_str(), totals.len());
                    totals.push((player.name.clone(), player.points));
                }
            }
        }
    }

    // stable, so ties stay in first-seen order
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    assign_ranks(totals)
}

/// Competition ranking over entries already sorted by total descending.
///
/// Tied totals share a rank and the next total takes its 1-based position,
/// so `10, 10, 5` ranks as `1, 1, 3`.
pub fn assign_ranks(sorted: Vec<(String, i64)>) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = Vec::with_capacity(sorted.len());

    for (i, (name, total_points)) in sorted.into_iter().enumerate() {
        let rank = match entries.last() {
            Some(prev) if prev.total_points == total_points => prev.rank,
            _ => u32::try_from(i + 1).unwrap_or(u32::MAX),
        };
        entries.push(RankedEntry {
            name,
            total_points,
            rank,
        });
    }

    entries
}
