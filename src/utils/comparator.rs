use crate::models::{DenormalizedGame, TeamStatLine};

/// Which side of the ball a statistic describes. Offensive stats are
/// better when higher; defensive stats (yards allowed, points allowed)
/// are better when lower, so their shares are inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Offense,
    Defense,
}

/// One labeled row of a head-to-head comparison, with each side's share
/// of the bar expressed as a percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub label: String,
    pub home_value: f64,
    pub away_value: f64,
    pub home_pct: f64,
    pub away_pct: f64,
}

/// Normalized comparison shares for one statistic.
///
/// Inputs must be finite and non-negative; a violation is a programming
/// error upstream (a stat line of the wrong shape), and silently coercing
/// it would produce misleading percentages.
pub fn compare_stat(home: f64, away: f64, kind: StatKind) -> (f64, f64) {
    assert!(
        home.is_finite() && away.is_finite() && home >= 0.0 && away >= 0.0,
        "stat values must be finite and non-negative (home={}, away={})",
        home,
        away
    );

    match kind {
        StatKind::Offense => {
            let total = home + away;
            if total == 0.0 {
                (50.0, 50.0)
            } else {
                (home / total * 100.0, away / total * 100.0)
            }
        }
        StatKind::Defense => {
            // Lower is better: a side allowing exactly zero takes the
            // whole bar.
            if home == 0.0 && away == 0.0 {
                (50.0, 50.0)
            } else if home == 0.0 {
                (100.0, 0.0)
            } else if away == 0.0 {
                (0.0, 100.0)
            } else {
                let inverse_total = 1.0 / home + 1.0 / away;
                (
                    (1.0 / home) / inverse_total * 100.0,
                    (1.0 / away) / inverse_total * 100.0,
                )
            }
        }
    }
}

/// Comparison rows for a pre-game matchup view: each team's season
/// offense head-to-head, then each team's season defense head-to-head.
pub fn matchup_rows(
    home_offense: &TeamStatLine,
    away_offense: &TeamStatLine,
    home_defense: &TeamStatLine,
    away_defense: &TeamStatLine,
) -> Vec<ComparisonRow> {
    let mut rows = Vec::new();

    let offense = [
        ("Total Offense (ypg)", home_offense.total_ypg, away_offense.total_ypg),
        ("Rushing (ypg)", home_offense.rush_ypg, away_offense.rush_ypg),
        ("Passing (ypg)", home_offense.pass_ypg, away_offense.pass_ypg),
        ("Scoring (ppg)", home_offense.scoring_avg, away_offense.scoring_avg),
    ];
    for (label, home, away) in offense {
        rows.push(row(label, home, away, StatKind::Offense));
    }

    let defense = [
        ("Total Defense (ypg)", home_defense.total_ypg, away_defense.total_ypg),
        ("Rush Defense (ypg)", home_defense.rush_ypg, away_defense.rush_ypg),
        ("Pass Defense (ypg)", home_defense.pass_ypg, away_defense.pass_ypg),
        ("Points Allowed (ppg)", home_defense.scoring_avg, away_defense.scoring_avg),
    ];
    for (label, home, away) in defense {
        rows.push(row(label, home, away, StatKind::Defense));
    }

    rows
}

/// Comparison rows for a completed game: final score plus per-quarter
/// line scores where both sides reported them.
pub fn result_rows(game: &DenormalizedGame) -> Vec<ComparisonRow> {
    let mut rows = vec![row(
        "Points",
        f64::from(game.home_points.unwrap_or(0).max(0)),
        f64::from(game.away_points.unwrap_or(0).max(0)),
        StatKind::Offense,
    )];

    let quarters = game.home_line_scores.len().min(game.away_line_scores.len());
    for quarter in 0..quarters {
        rows.push(row(
            &format!("Q{} Points", quarter + 1),
            game.home_line_scores[quarter].max(0.0),
            game.away_line_scores[quarter].max(0.0),
            StatKind::Offense,
        ));
    }

    rows
}

fn row(label: &str, home: f64, away: f64, kind: StatKind) -> ComparisonRow {
    let (home_pct, away_pct) = compare_stat(home, away, kind);
    ComparisonRow {
        label: label.to_string(),
        home_value: home,
        away_value: away,
        home_pct,
        away_pct,
    }
}
