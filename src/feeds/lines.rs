use crate::models::wire::RawLineGame;
use crate::models::BettingLine;
use std::collections::HashSet;

/// The single sportsbook whose lines are displayed. The raw feed carries
/// one line per provider per game; everything else is discarded.
pub const DEFAULT_PROVIDER: &str = "ESPN Bet";

/// Flatten raw `/lines` rows to at most one `BettingLine` per game id,
/// keeping only lines from the designated provider. Games with no
/// matching provider contribute no entry; the join engine fills "N/A".
pub fn provider_lines(raw: Vec<RawLineGame>, provider: &str) -> Vec<BettingLine> {
    let mut seen = HashSet::new();
    let mut betting_lines = Vec::new();

    for game in raw {
        if !seen.insert(game.id) {
            continue;
        }
        let Some(line) = game
            .lines
            .iter()
            .find(|line| line.provider.as_deref() == Some(provider))
        else {
            continue;
        };
        betting_lines.push(BettingLine {
            id: game.id,
            spread: line
                .formatted_spread
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            over_under: line
                .over_under
                .map(|total| total.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        });
    }

    betting_lines
}
