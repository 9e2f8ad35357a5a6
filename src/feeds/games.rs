use crate::models::wire::RawGame;
use crate::models::Game;
use chrono::DateTime;
use chrono_tz::America::New_York;

/// Clean raw `/games` rows into display-ready `Game` records. Kickoff
/// times are localized to US/Eastern; completion status is carried
/// through unfiltered.
pub fn clean_games(raw: Vec<RawGame>) -> Vec<Game> {
    raw.into_iter().map(clean_game).collect()
}

fn clean_game(raw: RawGame) -> Game {
    let (start_date, day_of_week) = match format_kickoff(&raw.start_date) {
        Some(formatted) => formatted,
        None => {
            tracing::warn!("unparseable start date for game {}: {}", raw.id, raw.start_date);
            (raw.start_date.clone(), String::new())
        }
    };

    Game {
        id: raw.id,
        start_date,
        day_of_week,
        home_team: raw.home_team,
        home_id: raw.home_id,
        home_points: raw.home_points,
        home_line_scores: raw.home_line_scores.unwrap_or_default(),
        away_team: raw.away_team,
        away_id: raw.away_id,
        away_points: raw.away_points,
        away_line_scores: raw.away_line_scores.unwrap_or_default(),
        completed: raw.completed,
    }
}

/// Localize an ISO-8601 kickoff to US/Eastern, returning the display
/// string ("Aug-24 03:30 PM") and the full weekday name.
fn format_kickoff(start_date: &str) -> Option<(String, String)> {
    let utc = DateTime::parse_from_rfc3339(start_date).ok()?;
    let eastern = utc.with_timezone(&New_York);
    Some((
        eastern.format("%b-%d %I:%M %p").to_string(),
        eastern.format("%A").to_string(),
    ))
}
