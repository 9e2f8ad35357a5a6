use crate::models::{BettingLine, DenormalizedGame, Game, MediaInfo, TeamRecord, TeamReference};
use std::collections::HashMap;

const NA: &str = "N/A";
const WHITE: &str = "#ffffff";

/// Left-join every feed onto the cleaned game list: betting lines and
/// media by game id, team reference by school name, records by team name.
/// Each join target is indexed once; output order matches input order.
/// Unresolved joins fill the defined sentinels so every field is always
/// present downstream.
pub fn assemble(
    games: Vec<Game>,
    lines: &[BettingLine],
    media: &[MediaInfo],
    team_refs: &[TeamReference],
    records: &[TeamRecord],
) -> Vec<DenormalizedGame> {
    let lines_by_id: HashMap<u64, &BettingLine> =
        lines.iter().map(|line| (line.id, line)).collect();
    let media_by_id: HashMap<u64, &MediaInfo> =
        media.iter().map(|info| (info.id, info)).collect();
    let refs_by_school: HashMap<&str, &TeamReference> = team_refs
        .iter()
        .map(|team| (team.school.as_str(), team))
        .collect();
    let records_by_team: HashMap<&str, &TeamRecord> = records
        .iter()
        .map(|record| (record.team.as_str(), record))
        .collect();

    games
        .into_iter()
        .map(|game| {
            let line = lines_by_id.get(&game.id);
            let media_info = media_by_id.get(&game.id);
            let home_ref = refs_by_school.get(game.home_team.as_str());
            let away_ref = refs_by_school.get(game.away_team.as_str());
            let home_record = records_by_team.get(game.home_team.as_str());
            let away_record = records_by_team.get(game.away_team.as_str());

            DenormalizedGame {
                id: game.id,
                start_date: game.start_date,
                day_of_week: game.day_of_week,
                home_team: game.home_team,
                home_id: game.home_id,
                home_points: game.home_points,
                home_line_scores: game.home_line_scores,
                away_team: game.away_team,
                away_id: game.away_id,
                away_points: game.away_points,
                away_line_scores: game.away_line_scores,
                completed: game.completed,
                spread: line.map_or_else(|| NA.to_string(), |l| l.spread.clone()),
                over_under: line.map_or_else(|| NA.to_string(), |l| l.over_under.clone()),
                outlet: media_info.map_or_else(|| NA.to_string(), |m| m.outlet.clone()),
                home_team_logo: home_ref.map_or_else(|| NA.to_string(), |t| t.logo.clone()),
                home_team_color: home_ref.map_or_else(|| WHITE.to_string(), |t| t.color.clone()),
                home_team_alt_color: home_ref
                    .map_or_else(|| WHITE.to_string(), |t| t.alt_color.clone()),
                away_team_logo: away_ref.map_or_else(|| NA.to_string(), |t| t.logo.clone()),
                away_team_color: away_ref.map_or_else(|| WHITE.to_string(), |t| t.color.clone()),
                away_team_alt_color: away_ref
                    .map_or_else(|| WHITE.to_string(), |t| t.alt_color.clone()),
                home_total_wins: count_or_na(home_record, |r| r.total_wins),
                home_total_losses: count_or_na(home_record, |r| r.total_losses),
                home_conference_wins: count_or_na(home_record, |r| r.conference_wins),
                home_conference_losses: count_or_na(home_record, |r| r.conference_losses),
                away_total_wins: count_or_na(away_record, |r| r.total_wins),
                away_total_losses: count_or_na(away_record, |r| r.total_losses),
                away_conference_wins: count_or_na(away_record, |r| r.conference_wins),
                away_conference_losses: count_or_na(away_record, |r| r.conference_losses),
            }
        })
        .collect()
}

fn count_or_na(record: Option<&&TeamRecord>, count: impl Fn(&TeamRecord) -> u32) -> String {
    record.map_or_else(|| NA.to_string(), |r| count(r).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u64, home: &str, away: &str) -> Game {
        Game {
            id,
            start_date: "Aug-31 03:30 PM".to_string(),
            day_of_week: "Saturday".to_string(),
            home_team: home.to_string(),
            home_id: 1,
            home_points: None,
            home_line_scores: Vec::new(),
            away_team: away.to_string(),
            away_id: 2,
            away_points: None,
            away_line_scores: Vec::new(),
            completed: false,
        }
    }

    fn team_ref(school: &str, color: &str) -> TeamReference {
        TeamReference {
            id: 1,
            school: school.to_string(),
            logo: format!("https://cdn.example/{}.png", school),
            color: color.to_string(),
            alt_color: "#ffffff".to_string(),
        }
    }

    fn record(team: &str, wins: u32, losses: u32) -> TeamRecord {
        TeamRecord {
            team: team.to_string(),
            total_wins: wins,
            total_losses: losses,
            conference_wins: wins.saturating_sub(1),
            conference_losses: losses,
        }
    }

    #[test]
    fn test_one_output_per_game_in_input_order() {
        let games = vec![game(3, "C", "D"), game(1, "A", "B"), game(2, "E", "F")];
        let assembled = assemble(games, &[], &[], &[], &[]);
        let ids: Vec<u64> = assembled.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_all_joins_resolve() {
        let games = vec![game(1, "Alabama", "LSU")];
        let lines = vec![BettingLine {
            id: 1,
            spread: "Alabama -7".to_string(),
            over_under: "54.5".to_string(),
        }];
        let media = vec![MediaInfo {
            id: 1,
            outlet: "ESPN, ABC".to_string(),
        }];
        let refs = vec![team_ref("Alabama", "#9E1B32"), team_ref("LSU", "#461D7C")];
        let records = vec![record("Alabama", 8, 1), record("LSU", 6, 3)];

        let assembled = assemble(games, &lines, &media, &refs, &records);
        let g = &assembled[0];
        assert_eq!(g.spread, "Alabama -7");
        assert_eq!(g.over_under, "54.5");
        assert_eq!(g.outlet, "ESPN, ABC");
        assert_eq!(g.home_team_color, "#9E1B32");
        assert_eq!(g.away_team_logo, "https://cdn.example/LSU.png");
        assert_eq!(g.home_total_wins, "8");
        assert_eq!(g.away_conference_wins, "5");
    }

    #[test]
    fn test_unresolved_joins_fill_sentinels() {
        let assembled = assemble(vec![game(9, "Nobody State", "Unknown Tech")], &[], &[], &[], &[]);
        let g = &assembled[0];
        assert_eq!(g.spread, "N/A");
        assert_eq!(g.over_under, "N/A");
        assert_eq!(g.outlet, "N/A");
        assert_eq!(g.home_team_logo, "N/A");
        assert_eq!(g.away_team_logo, "N/A");
        assert_eq!(g.home_team_color, "#ffffff");
        assert_eq!(g.away_team_alt_color, "#ffffff");
        assert_eq!(g.home_total_wins, "N/A");
        assert_eq!(g.away_conference_losses, "N/A");
    }

    #[test]
    fn test_partial_joins_mix_values_and_sentinels() {
        let refs = vec![team_ref("Alabama", "#9E1B32")];
        let assembled = assemble(vec![game(1, "Alabama", "LSU")], &[], &[], &refs, &[]);
        let g = &assembled[0];
        assert_eq!(g.home_team_color, "#9E1B32");
        assert_eq!(g.away_team_color, "#ffffff");
        assert_eq!(g.away_team_logo, "N/A");
    }
}
