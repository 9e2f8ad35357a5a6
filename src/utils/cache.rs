use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Per-feed cache TTLs. The underlying data changes slowly; betting lines
/// move more often than the rest.
pub mod ttl {
    use std::time::Duration;

    pub const SCHEDULE: Duration = Duration::from_secs(3600);
    pub const GAMES: Duration = Duration::from_secs(3600);
    pub const RECORDS: Duration = Duration::from_secs(3600);
    pub const MEDIA: Duration = Duration::from_secs(3600);
    pub const LINES: Duration = Duration::from_secs(1800);
    pub const TEAM_REFERENCE: Duration = Duration::from_secs(3600);
}

/// A read-through, time-expiring cache for feed results, keyed by feed
/// name plus arguments (e.g. "games:2024:3"). Values are stored as JSON
/// snapshots and decoded on read. No stampede protection; request
/// volume here is one consumer on a timer.
#[derive(Debug, Default)]
pub struct FeedCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

#[derive(Debug)]
struct CacheEntry {
    expires_at: Instant,
    value: serde_json::Value,
}

impl FeedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cached value, if present, unexpired, and decodable as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock().expect("feed cache lock poisoned");
        match entries.get(key) {
            Some(entry) if Instant::now() < entry.expires_at => {
                serde_json::from_value(entry.value.clone()).ok()
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a value under `key` for `ttl`. Serialization failures are
    /// logged and skipped; the cache is an optimization, not a store of
    /// record.
    pub fn put<T: Serialize>(&self, key: &str, ttl: Duration, value: &T) {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("not caching {}: {}", key, e);
                return;
            }
        };
        let mut entries = self.entries.lock().expect("feed cache lock poisoned");
        entries.insert(
            key.to_string(),
            CacheEntry {
                expires_at: Instant::now() + ttl,
                value,
            },
        );
    }
}
