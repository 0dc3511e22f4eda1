use colored::{ColoredString, Colorize};

use crate::api::models::points_label;
use crate::config::CompetitionConfig;
use crate::domain::{LeaderboardSummary, RankedEntry, StageRecord};

/// Render a leaderboard as a text table
pub fn format_ranking(entries: &[RankedEntry], stage: Option<&str>) -> String {
    if entries.is_empty() {
        return "No results yet\n".to_string();
    }

    let width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    let mut out = format!("{:>5}  {:<width$}  {}\n", "#", "Player", points_label(stage), width = width);

    for entry in entries {
        let badge = format!("{:>4}º", entry.rank);
        out.push_str(&format!(
            "{}  {:<width$}  {:>6} pts\n",
            rank_badge(&badge, entry.rank),
            entry.name,
            entry.total_points,
            width = width
        ));
    }

    out
}

fn rank_badge(badge: &str, rank: u32) -> ColoredString {
    match rank {
        1 => badge.yellow().bold(),
        2 => badge.white().bold(),
        3 => badge.red(),
        _ => badge.normal(),
    }
}

pub fn format_summary(summary: &LeaderboardSummary) -> String {
    format!(
        "Players: {} active\n{}: {}\nStages: {} completed\n",
        summary.active_players, summary.leader_label, summary.leaders_text, summary.stages_completed
    )
}

pub fn format_stages(stages: &[StageRecord]) -> String {
    if stages.is_empty() {
        return "No stages found\n".to_string();
    }

    stages
        .iter()
        .map(|stage| {
            format!(
                "{}  {} ({} players) [{}]\n",
                stage.name.bold(),
                stage.sheet_name,
                stage.players.len(),
                stage.id
            )
        })
        .collect()
}

pub fn format_competitions(competitions: &[CompetitionConfig]) -> String {
    competitions
        .iter()
        .map(|c| format!("{} {:<6} {}  ({})\n", c.icon, c.title.bold(), c.subtitle, c.id))
        .collect()
}
