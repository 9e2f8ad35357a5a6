use crate::models::wire::RawCalendarWeek;
use crate::models::WeekOption;
use chrono::{DateTime, NaiveDate};

/// Build selectable week options from the raw `/calendar` feed. Rows whose
/// game-start fields cannot be parsed are dropped with a warning.
pub fn week_options(raw: Vec<RawCalendarWeek>) -> Vec<WeekOption> {
    raw.into_iter()
        .filter_map(|week| {
            let first = parse_feed_date(&week.first_game_start);
            let last = parse_feed_date(&week.last_game_start);
            match (first, last) {
                (Some(first), Some(last)) => Some(WeekOption {
                    week: week.week,
                    label: format!(
                        "Week {} ({} - {})",
                        week.week,
                        first.format("%b-%d"),
                        last.format("%b-%d")
                    ),
                    last_game_start: last,
                }),
                _ => {
                    tracing::warn!(
                        "dropping calendar week {} with unparseable dates ({} / {})",
                        week.week,
                        week.first_game_start,
                        week.last_game_start
                    );
                    None
                }
            }
        })
        .collect()
}

/// The default week selection: the first week whose last game is
/// today-or-later, falling back to the first listed week.
pub fn default_week(options: &[WeekOption], today: NaiveDate) -> Option<u8> {
    options
        .iter()
        .find(|option| today <= option.last_game_start)
        .or_else(|| options.first())
        .map(|option| option.week)
}

/// The calendar feed has shipped game-start fields both as full ISO-8601
/// timestamps and as bare dates; accept either.
fn parse_feed_date(value: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_utc().date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_week(week: u8, first: &str, last: &str) -> RawCalendarWeek {
        RawCalendarWeek {
            week,
            first_game_start: first.to_string(),
            last_game_start: last.to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_labels() {
        let options = week_options(vec![raw_week(
            1,
            "2024-08-24T04:00:00.000Z",
            "2024-09-02T04:00:00.000Z",
        )]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "Week 1 (Aug-24 - Sep-02)");
        assert_eq!(options[0].last_game_start, date(2024, 9, 2));
    }

    #[test]
    fn test_accepts_bare_dates() {
        let options = week_options(vec![raw_week(2, "2024-09-05", "2024-09-09")]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].last_game_start, date(2024, 9, 9));
    }

    #[test]
    fn test_unparseable_week_is_dropped() {
        let options = week_options(vec![
            raw_week(1, "not a date", "2024-09-02"),
            raw_week(2, "2024-09-05", "2024-09-09"),
        ]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].week, 2);
    }

    #[test]
    fn test_default_week_picks_first_current_or_future() {
        let options = week_options(vec![
            raw_week(1, "2024-08-24", "2024-09-02"),
            raw_week(2, "2024-09-05", "2024-09-09"),
            raw_week(3, "2024-09-12", "2024-09-16"),
        ]);
        // Mid-week-2: week 1 is over, week 2's last game is still ahead
        assert_eq!(default_week(&options, date(2024, 9, 7)), Some(2));
        // On the boundary day itself the week still counts
        assert_eq!(default_week(&options, date(2024, 9, 9)), Some(2));
    }

    #[test]
    fn test_default_week_falls_back_to_first() {
        let options = week_options(vec![
            raw_week(1, "2024-08-24", "2024-09-02"),
            raw_week(2, "2024-09-05", "2024-09-09"),
        ]);
        // Season is over; fall back to the first listed week
        assert_eq!(default_week(&options, date(2025, 1, 15)), Some(1));
        assert_eq!(default_week(&[], date(2025, 1, 15)), None);
    }
}
