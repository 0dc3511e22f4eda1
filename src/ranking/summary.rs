use crate::domain::{LeaderboardSummary, PhotoEntry, StageRecord, stage_label};
use crate::ranking::aggregate::aggregate;

/// Footer stats for the overall view
pub fn summarize(stages: &[StageRecord]) -> LeaderboardSummary {
    let ranking = aggregate(stages, None);
    let leaders: Vec<String> = ranking
        .iter()
        .filter(|entry| entry.rank == 1)
        .map(|entry| entry.name.clone())
        .collect();

    LeaderboardSummary {
        active_players: ranking.len(),
        leader_label: leader_label(leaders.len()).to_string(),
        leaders_text: leaders_text(&leaders),
        leaders,
        stages_completed: stages.len(),
        latest_stage_label: stage_label(stages.len()),
    }
}

fn leader_label(count: usize) -> &'static str {
    if count > 1 { "Co-Leaders" } else { "Leader" }
}

/// `"A"`, `"A & B"`, or `"A & +N"` once there are more than two leaders
fn leaders_text(leaders: &[String]) -> String {
    match leaders {
        [] => "--".to_string(),
        [first, rest @ ..] if rest.len() > 1 => format!("{} & +{}", first, rest.len()),
        _ => leaders.join(" & "),
    }
}

/// Players of one stage that have a photo, in sheet order
pub fn stage_photos(stages: &[StageRecord], stage_id: &str) -> Vec<PhotoEntry> {
    stages
        .iter()
        .find(|stage| stage.id == stage_id)
        .map(|stage| {
            stage
                .players
                .iter()
                .filter(|player| player.has_photo())
                .map(|player| PhotoEntry {
                    name: player.name.clone(),
                    photo_url: player.photo_url.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerRecord;

    fn player(name: &str, points: i64, photo_url: &str) -> PlayerRecord {
        PlayerRecord {
            rank: 0,
            name: name.to_string(),
            points,
            photo_url: photo_url.to_string(),
        }
    }

    fn stage(index: usize, players: Vec<PlayerRecord>) -> StageRecord {
        StageRecord::new("sf6", index, format!("ETAPA{}", index), players)
    }

    #[test]
    fn test_single_leader() {
        let stages = vec![
            stage(1, vec![player("A", 10, ""), player("B", 5, "")]),
            stage(2, vec![player("B", 3, "")]),
        ];

        let summary = summarize(&stages);

        assert_eq!(summary.active_players, 2);
        assert_eq!(summary.leaders, vec!["A"]);
        assert_eq!(summary.leader_label, "Leader");
        assert_eq!(summary.leaders_text, "A");
        assert_eq!(summary.stages_completed, 2);
        assert_eq!(summary.latest_stage_label, "Stage 02");
    }

    #[test]
    fn test_two_co_leaders() {
        let stages = vec![stage(1, vec![player("A", 10, ""), player("B", 10, "")])];

        let summary = summarize(&stages);

        assert_eq!(summary.leader_label, "Co-Leaders");
        assert_eq!(summary.leaders_text, "A & B");
    }

    #[test]
    fn test_many_co_leaders_are_collapsed() {
        let stages = vec![stage(
            1,
            vec![player("A", 1, ""), player("B", 1, ""), player("C", 1, ""), player("D", 0, "")],
        )];

        let summary = summarize(&stages);

        assert_eq!(summary.leaders.len(), 3);
        assert_eq!(summary.leaders_text, "A & +2");
    }

    #[test]
    fn test_empty_competition() {
        let summary = summarize(&[]);

        assert_eq!(summary.active_players, 0);
        assert!(summary.leaders.is_empty());
        assert_eq!(summary.leaders_text, "--");
        assert_eq!(summary.latest_stage_label, "Stage 00");
    }

    #[test]
    fn test_stage_photos_skip_players_without_photo() {
        let stages = vec![
            stage(1, vec![player("A", 1, "https://i.imgur.com/a.jpg")]),
            stage(
                2,
                vec![
                    player("B", 3, "https://i.imgur.com/b.jpg"),
                    player("C", 2, ""),
                    player("D", 1, "https://example.com/d.png"),
                ],
            ),
        ];

        let photos = stage_photos(&stages, "sf6-etapa-2");

        let names: Vec<_> = photos.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "D"]);
        assert_eq!(photos[1].photo_url, "https://example.com/d.png");
    }

    #[test]
    fn test_stage_photos_unknown_stage() {
        let stages = vec![stage(1, vec![player("A", 1, "https://i.imgur.com/a.jpg")])];
        assert!(stage_photos(&stages, "sf6-etapa-7").is_empty());
    }
}
