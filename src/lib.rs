pub mod api;
pub mod config;
pub mod feeds;
pub mod models;
pub mod poll;
pub mod teams;
pub mod utils;

pub use api::CfbdClient;
pub use config::Config;
pub use models::*;
pub use poll::{PollLoop, PollState, TickOutcome};
pub use teams::{stats::TeamStats, DatasetError};
pub use utils::cache::FeedCache;

use chrono::NaiveDate;
use std::path::Path;
use utils::cache::ttl;

/// Only FBS games are displayed.
pub const DIVISION: &str = "fbs";

/// The static datasets loaded once at startup: team logos/colors and the
/// per-team offense/defense season statistics.
pub struct StaticDatasets {
    pub team_refs: Vec<TeamReference>,
    pub stats: TeamStats,
}

impl StaticDatasets {
    /// Load all datasets from a directory. Any missing or malformed file
    /// is fatal.
    pub fn load(dir: &Path) -> Result<Self, DatasetError> {
        Ok(Self {
            team_refs: teams::reference::load_team_reference(&dir.join("team_info.json"))?,
            stats: TeamStats::load(
                &dir.join("offense_stats.json"),
                &dir.join("defense_stats.json"),
            )?,
        })
    }
}

/// Fetch the season calendar and derive the selectable weeks plus the
/// default selection for `today`. A failed fetch yields no options.
pub async fn week_selection(
    client: &CfbdClient,
    cache: &FeedCache,
    year: u16,
    today: NaiveDate,
) -> (Vec<WeekOption>, Option<u8>) {
    let key = format!("calendar:{}", year);
    let raw = match cache.get(&key) {
        Some(cached) => cached,
        None => {
            let Some(fetched) = client.calendar(year).await else {
                return (Vec::new(), None);
            };
            cache.put(&key, ttl::SCHEDULE, &fetched);
            fetched
        }
    };

    let options = feeds::schedule::week_options(raw);
    let selected = feeds::schedule::default_week(&options, today);
    (options, selected)
}

/// Build the denormalized display list for one week: fetch and normalize
/// the games, lines, media, and records feeds (each read through the
/// cache), then join everything by game id and team name. Feed failures
/// degrade to "N/A" fields, so this never errors.
pub async fn build_week_display(
    client: &CfbdClient,
    cache: &FeedCache,
    team_refs: &[TeamReference],
    year: u16,
    week: u8,
) -> Vec<DenormalizedGame> {
    let raw_games = fetch_cached(
        cache,
        &format!("games:{}:{}", year, week),
        ttl::GAMES,
        client.games(year, week, DIVISION),
    )
    .await;
    let raw_lines = fetch_cached(
        cache,
        &format!("lines:{}:{}", year, week),
        ttl::LINES,
        client.lines(year, week),
    )
    .await;
    let raw_media = fetch_cached(
        cache,
        &format!("media:{}:{}", year, week),
        ttl::MEDIA,
        client.media(year, week),
    )
    .await;
    let raw_records = fetch_cached(
        cache,
        &format!("records:{}", year),
        ttl::RECORDS,
        client.records(year),
    )
    .await;

    let games = feeds::games::clean_games(raw_games);
    let lines = feeds::lines::provider_lines(raw_lines, feeds::lines::DEFAULT_PROVIDER);
    let media = feeds::media::consolidate_media(raw_media);
    let records = feeds::records::create_records(raw_records);

    utils::assembler::assemble(games, &lines, &media, team_refs, &records)
}

/// The "selection changed" operation: the drill-down rows for one game,
/// a stats matchup before kickoff, the final score breakdown after.
pub fn game_detail(
    games: &[DenormalizedGame],
    stats: &TeamStats,
    game_id: u64,
) -> Option<Vec<utils::comparator::ComparisonRow>> {
    use utils::comparator::StatKind;

    let game = games.iter().find(|game| game.id == game_id)?;
    if game.completed {
        Some(utils::comparator::result_rows(game))
    } else {
        Some(utils::comparator::matchup_rows(
            &stats.for_team(StatKind::Offense, game.home_id),
            &stats.for_team(StatKind::Offense, game.away_id),
            &stats.for_team(StatKind::Defense, game.home_id),
            &stats.for_team(StatKind::Defense, game.away_id),
        ))
    }
}

/// Read-through cache wrapper around one feed fetch. Only successful
/// fetches are cached; a failure yields an empty list and is retried on
/// the next refresh.
async fn fetch_cached<T, F>(cache: &FeedCache, key: &str, ttl: std::time::Duration, fetch: F) -> Vec<T>
where
    T: serde::de::DeserializeOwned + serde::Serialize,
    F: std::future::Future<Output = Option<Vec<T>>>,
{
    if let Some(cached) = cache.get(key) {
        return cached;
    }
    match fetch.await {
        Some(fetched) => {
            cache.put(key, ttl, &fetched);
            fetched
        }
        None => Vec::new(),
    }
}
