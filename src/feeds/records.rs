use crate::models::wire::RawTeamRecord;
use crate::models::TeamRecord;

/// Flatten raw `/records` rows, defaulting missing win/loss counts to 0.
pub fn create_records(raw: Vec<RawTeamRecord>) -> Vec<TeamRecord> {
    raw.into_iter()
        .map(|record| TeamRecord {
            team: record.team,
            total_wins: record.total.wins.unwrap_or(0),
            total_losses: record.total.losses.unwrap_or(0),
            conference_wins: record.conference_games.wins.unwrap_or(0),
            conference_losses: record.conference_games.losses.unwrap_or(0),
        })
        .collect()
}
