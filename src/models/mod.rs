pub mod wire;

use serde::{Deserialize, Serialize};

/// A cleaned game row from the `/games` feed. Kickoff is already localized
/// for display; `completed` gates spread applicability and the matchup vs.
/// result drill-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    pub start_date: String,
    pub day_of_week: String,
    pub home_team: String,
    pub home_id: u32,
    pub home_points: Option<i32>,
    pub home_line_scores: Vec<f64>,
    pub away_team: String,
    pub away_id: u32,
    pub away_points: Option<i32>,
    pub away_line_scores: Vec<f64>,
    pub completed: bool,
}

/// One betting line per game, already filtered to the designated provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BettingLine {
    pub id: u64,
    pub spread: String,
    pub over_under: String,
}

/// Media outlets for one game, concatenated in feed arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    pub id: u64,
    pub outlet: String,
}

/// A team's win/loss record, flattened from the nested `/records` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team: String,
    pub total_wins: u32,
    pub total_losses: u32,
    pub conference_wins: u32,
    pub conference_losses: u32,
}

/// Static team metadata keyed by school name. Colors are validated hex
/// strings; logo URLs are forced to https.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReference {
    pub id: u32,
    pub school: String,
    pub logo: String,
    pub color: String,
    pub alt_color: String,
}

/// The join output consumed by the presentation layer. Every field is
/// always populated; unresolved joins carry "N/A" (or white for colors)
/// so the consumer never branches on missing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenormalizedGame {
    pub id: u64,
    pub start_date: String,
    pub day_of_week: String,
    pub home_team: String,
    pub home_id: u32,
    pub home_points: Option<i32>,
    pub home_line_scores: Vec<f64>,
    pub away_team: String,
    pub away_id: u32,
    pub away_points: Option<i32>,
    pub away_line_scores: Vec<f64>,
    pub completed: bool,
    pub spread: String,
    pub over_under: String,
    pub outlet: String,
    pub home_team_logo: String,
    pub home_team_color: String,
    pub home_team_alt_color: String,
    pub away_team_logo: String,
    pub away_team_color: String,
    pub away_team_alt_color: String,
    pub home_total_wins: String,
    pub home_total_losses: String,
    pub home_conference_wins: String,
    pub home_conference_losses: String,
    pub away_total_wins: String,
    pub away_total_losses: String,
    pub away_conference_wins: String,
    pub away_conference_losses: String,
}

/// One live-score entry from the `/scoreboard` feed, captured each poll
/// tick. Value equality between consecutive snapshots gates refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveScoreSnapshot {
    pub game_id: u64,
    pub status: String,
    pub period: Option<u32>,
    pub clock: Option<String>,
    pub situation: Option<String>,
    pub possession: Option<String>,
    pub home_id: u32,
    pub home_team: String,
    pub home_team_score: Option<i32>,
    pub away_id: u32,
    pub away_team: String,
    pub away_team_score: Option<i32>,
    pub spread: Option<f64>,
    pub tv: Option<String>,
}

/// Per-team season statistics from the static offense/defense datasets.
/// A team absent from the dataset gets an all-zero line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatLine {
    pub id: u32,
    pub total_rank: u32,
    pub total_ypg: f64,
    pub rush_rank: u32,
    pub rush_ypg: f64,
    pub pass_rank: u32,
    pub pass_ypg: f64,
    pub scoring_avg: f64,
    pub scoring_rank: u32,
}

/// A selectable week derived from the `/calendar` feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekOption {
    pub week: u8,
    pub label: String,
    pub last_game_start: chrono::NaiveDate,
}
