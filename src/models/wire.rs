//! Wire types for the CollegeFootballData API payloads and the local
//! static datasets. These mirror the upstream JSON shapes and are only
//! read and projected, never mutated.

use serde::{Deserialize, Serialize};

/// A row from `GET /games`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGame {
    pub id: u64,
    pub start_date: String,
    pub completed: bool,
    pub home_id: u32,
    pub home_team: String,
    pub home_points: Option<i32>,
    pub home_line_scores: Option<Vec<f64>>,
    pub away_id: u32,
    pub away_team: String,
    pub away_points: Option<i32>,
    pub away_line_scores: Option<Vec<f64>>,
}

/// A row from `GET /calendar`. The game-start fields arrive either as a
/// full ISO-8601 timestamp or a bare date, depending on the season.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCalendarWeek {
    pub week: u8,
    pub first_game_start: String,
    pub last_game_start: String,
}

/// A row from `GET /records`, with nested win/loss sub-objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTeamRecord {
    pub team: String,
    #[serde(default)]
    pub total: RawWinLoss,
    #[serde(default)]
    pub conference_games: RawWinLoss,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawWinLoss {
    pub wins: Option<u32>,
    pub losses: Option<u32>,
}

/// A row from `GET /lines`: one game with a nested line per provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLineGame {
    pub id: u64,
    #[serde(default)]
    pub lines: Vec<RawLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLine {
    pub provider: Option<String>,
    pub formatted_spread: Option<String>,
    pub over_under: Option<f64>,
}

/// A row from `GET /games/media`: one outlet per row, multiple rows per game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMediaEntry {
    pub id: u64,
    pub outlet: String,
}

/// A row from `GET /scoreboard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScoreboardGame {
    pub id: u64,
    pub status: String,
    pub period: Option<u32>,
    pub clock: Option<String>,
    pub situation: Option<String>,
    pub possession: Option<String>,
    pub tv: Option<String>,
    pub home_team: RawScoreboardTeam,
    pub away_team: RawScoreboardTeam,
    #[serde(default)]
    pub betting: RawScoreboardBetting,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawScoreboardTeam {
    pub id: u32,
    pub name: String,
    pub points: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScoreboardBetting {
    pub spread: Option<f64>,
}

/// An entry from the static `team_info.json` dataset. `logos` has shipped
/// both as a list and as a single string, so both shapes are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTeamInfo {
    pub id: u32,
    pub school: String,
    pub logos: Option<RawLogos>,
    pub color: Option<String>,
    pub alternate_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawLogos {
    Many(Vec<String>),
    One(String),
}

impl RawLogos {
    /// The first logo URL, if any.
    pub fn primary(&self) -> Option<&str> {
        match self {
            RawLogos::Many(urls) => urls.first().map(String::as_str),
            RawLogos::One(url) => Some(url.as_str()),
        }
    }
}
