use crate::models::wire::{
    RawCalendarWeek, RawGame, RawLineGame, RawMediaEntry, RawScoreboardGame, RawTeamRecord,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

const BASE_URL: &str = "https://api.collegefootballdata.com";

/// Client for the CollegeFootballData API.
///
/// Every endpoint wrapper returns `None` on any transport or HTTP error;
/// the error is logged here and callers treat `None` exactly like "no
/// data". This is the single point of I/O failure containment; nothing
/// downstream sees an error value.
pub struct CfbdClient {
    client: Client,
    api_key: String,
}

impl CfbdClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// `GET /games` for one week.
    pub async fn games(&self, year: u16, week: u8, division: &str) -> Option<Vec<RawGame>> {
        self.fetch_json(
            "/games",
            &[
                ("year", year.to_string()),
                ("week", week.to_string()),
                ("division", division.to_string()),
            ],
        )
        .await
    }

    /// `GET /games/media` for one week.
    pub async fn media(&self, year: u16, week: u8) -> Option<Vec<RawMediaEntry>> {
        self.fetch_json(
            "/games/media",
            &[("year", year.to_string()), ("week", week.to_string())],
        )
        .await
    }

    /// `GET /lines` for one week.
    pub async fn lines(&self, year: u16, week: u8) -> Option<Vec<RawLineGame>> {
        self.fetch_json(
            "/lines",
            &[("year", year.to_string()), ("week", week.to_string())],
        )
        .await
    }

    /// `GET /records` for a season.
    pub async fn records(&self, year: u16) -> Option<Vec<RawTeamRecord>> {
        self.fetch_json("/records", &[("year", year.to_string())]).await
    }

    /// `GET /calendar` for a season.
    pub async fn calendar(&self, year: u16) -> Option<Vec<RawCalendarWeek>> {
        self.fetch_json("/calendar", &[("year", year.to_string())]).await
    }

    /// `GET /scoreboard`: live scores for the given classification.
    pub async fn scoreboard(&self, classification: &str) -> Option<Vec<RawScoreboardGame>> {
        self.fetch_json(
            "/scoreboard",
            &[("classification", classification.to_string())],
        )
        .await
    }

    /// One authenticated GET with query parameters. No retries, no timeout
    /// override beyond the transport default.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Option<T> {
        let url = format!("{}{}", BASE_URL, path);

        let response = match self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("accept", "application/json")
            .query(query)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("request to {} failed: {}", url, e);
                return None;
            }
        };

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("{} returned error status: {}", url, e);
                return None;
            }
        };

        match response.json::<T>().await {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::error!("failed to decode response from {}: {}", url, e);
                None
            }
        }
    }
}
