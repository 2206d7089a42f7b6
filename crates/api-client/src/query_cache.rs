use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A single cached query result with an optional expiry.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    expires_at: Option<DateTime<Utc>>,
}

impl CacheEntry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Explicit, injectable cache for remote query results.
///
/// Keyed by query identity (e.g. `properties?status=rent`), holding JSON
/// values. Handed to components through context so tests can construct and
/// inspect their own instance — there is no process-wide ambient cache.
///
/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
}

impl PartialEq for QueryCache {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a cached value. Expired entries are evicted and report a miss.
    pub fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock().ok()?;
        let now = Utc::now();
        match entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Store a value under `key`. A `ttl` of `None` caches until invalidated.
    pub fn set(&self, key: &str, value: Value, ttl: Option<Duration>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key.to_string(),
                CacheEntry {
                    value,
                    expires_at: ttl.map(|d| Utc::now() + d),
                },
            );
        }
    }

    /// Drop the entry stored under exactly `key`.
    pub fn invalidate(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }

    /// Drop every entry whose key starts with `prefix`.
    ///
    /// Mutations use this to invalidate a whole query family at once
    /// (`properties` covers every filter combination).
    pub fn invalidate_prefix(&self, prefix: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|key, _| !key.starts_with(prefix));
        }
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
