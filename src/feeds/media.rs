use crate::models::wire::RawMediaEntry;
use crate::models::MediaInfo;
use std::collections::HashMap;

/// Group raw `/games/media` rows by game id, concatenating outlet names
/// with ", " in feed arrival order. No deduplication, no sorting: the
/// feed's order is the display order.
pub fn consolidate_media(raw: Vec<RawMediaEntry>) -> Vec<MediaInfo> {
    let mut order: Vec<u64> = Vec::new();
    let mut outlets: HashMap<u64, Vec<String>> = HashMap::new();

    for entry in raw {
        let grouped = outlets.entry(entry.id).or_default();
        if grouped.is_empty() {
            order.push(entry.id);
        }
        grouped.push(entry.outlet);
    }

    order
        .into_iter()
        .map(|id| MediaInfo {
            id,
            outlet: outlets.remove(&id).unwrap_or_default().join(", "),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, outlet: &str) -> RawMediaEntry {
        RawMediaEntry {
            id,
            outlet: outlet.to_string(),
        }
    }

    #[test]
    fn test_concatenates_in_arrival_order_without_dedup() {
        let media = consolidate_media(vec![
            entry(1, "ESPN"),
            entry(1, "ABC"),
            entry(1, "ESPN2"),
        ]);
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].outlet, "ESPN, ABC, ESPN2");
    }

    #[test]
    fn test_games_keep_first_seen_order() {
        let media = consolidate_media(vec![
            entry(7, "FOX"),
            entry(3, "CBS"),
            entry(7, "FS1"),
        ]);
        assert_eq!(media.len(), 2);
        assert_eq!(media[0].id, 7);
        assert_eq!(media[0].outlet, "FOX, FS1");
        assert_eq!(media[1].id, 3);
        assert_eq!(media[1].outlet, "CBS");
    }
}
