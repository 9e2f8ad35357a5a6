use crate::models::wire::RawScoreboardGame;
use crate::models::LiveScoreSnapshot;

/// Re-key the raw `/scoreboard` payload into snapshot records. Status is
/// carried through verbatim here; the poll loop owns the in-progress
/// filter and display relabeling.
pub fn live_snapshots(raw: Vec<RawScoreboardGame>) -> Vec<LiveScoreSnapshot> {
    raw.into_iter()
        .map(|game| LiveScoreSnapshot {
            game_id: game.id,
            status: game.status,
            period: game.period,
            clock: game.clock,
            situation: game.situation,
            possession: game.possession,
            home_id: game.home_team.id,
            home_team: game.home_team.name,
            home_team_score: game.home_team.points,
            away_id: game.away_team.id,
            away_team: game.away_team.name,
            away_team_score: game.away_team.points,
            spread: game.betting.spread,
            tv: game.tv,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::wire::{RawScoreboardBetting, RawScoreboardTeam};

    #[test]
    fn test_rekeys_nested_payload() {
        let raw = vec![RawScoreboardGame {
            id: 401628319,
            status: "in_progress".to_string(),
            period: Some(2),
            clock: Some("07:45".to_string()),
            situation: Some("2nd & 10 at ALA 35".to_string()),
            possession: Some("home".to_string()),
            tv: Some("ESPN".to_string()),
            home_team: RawScoreboardTeam {
                id: 333,
                name: "Alabama".to_string(),
                points: Some(21),
            },
            away_team: RawScoreboardTeam {
                id: 99,
                name: "LSU".to_string(),
                points: Some(14),
            },
            betting: RawScoreboardBetting {
                spread: Some(-7.5),
            },
        }];
        let snapshots = live_snapshots(raw);
        assert_eq!(snapshots.len(), 1);
        let snap = &snapshots[0];
        assert_eq!(snap.game_id, 401628319);
        assert_eq!(snap.status, "in_progress");
        assert_eq!(snap.home_team, "Alabama");
        assert_eq!(snap.home_team_score, Some(21));
        assert_eq!(snap.away_team_score, Some(14));
        assert_eq!(snap.spread, Some(-7.5));
        assert_eq!(snap.tv.as_deref(), Some("ESPN"));
    }

    #[test]
    fn test_pregame_scores_stay_absent() {
        let raw = vec![RawScoreboardGame {
            id: 2,
            status: "scheduled".to_string(),
            period: None,
            clock: None,
            situation: None,
            possession: None,
            tv: None,
            home_team: RawScoreboardTeam {
                id: 1,
                name: "Oregon".to_string(),
                points: None,
            },
            away_team: RawScoreboardTeam {
                id: 2,
                name: "Washington".to_string(),
                points: None,
            },
            betting: RawScoreboardBetting::default(),
        }];
        let snapshots = live_snapshots(raw);
        assert_eq!(snapshots[0].home_team_score, None);
        assert_eq!(snapshots[0].period, None);
    }
}
