use anyhow::{Context, Result};
use chrono::Datelike;

/// Runtime configuration, sourced from the process environment (with a
/// `.env` file honored when running locally).
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the CollegeFootballData API.
    pub api_key: String,
    /// Listening port handed to the display collaborator.
    pub port: u16,
    /// Season year queried from every feed.
    pub year: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let api_key = std::env::var("API_KEY").context("API_KEY not set")?;
        let port = std::env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080);
        let year = std::env::var("SEASON_YEAR")
            .ok()
            .and_then(|year| year.parse().ok())
            .unwrap_or_else(|| chrono::Utc::now().year() as u16);

        Ok(Self {
            api_key,
            port,
            year,
        })
    }
}
