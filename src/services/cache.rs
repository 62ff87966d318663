//! In-memory cache for fetched datasets.
//!
//! The caniuse dataset is several megabytes of JSON and changes at most a few
//! times a day, so a server may keep the parsed copy for a while. A zero TTL
//! disables caching and every render fetches afresh.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::models::CaniuseDataset;

/// A cached value with expiration time.
struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

impl<T: Clone> CacheEntry<T> {
    fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn get(&self) -> Option<T> {
        if self.is_expired() {
            None
        } else {
            Some(self.value.clone())
        }
    }
}

/// Parsed datasets keyed by the URL they were fetched from.
pub struct DatasetCache {
    entries: RwLock<HashMap<String, CacheEntry<Arc<CaniuseDataset>>>>,
    ttl: Duration,
}

impl DatasetCache {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Get a cached dataset, or None if expired/missing.
    pub fn get(&self, url: &str) -> Option<Arc<CaniuseDataset>> {
        self.entries
            .read()
            .ok()
            .and_then(|guard| guard.get(url).and_then(|e| e.get()))
    }

    pub fn set(&self, url: &str, dataset: Arc<CaniuseDataset>) {
        if !self.is_enabled() {
            return;
        }
        if let Ok(mut guard) = self.entries.write() {
            guard.retain(|_, entry| !entry.is_expired());
            guard.insert(url.to_string(), CacheEntry::new(dataset, self.ttl));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let cache = DatasetCache::with_ttl(Duration::ZERO);
        cache.set("http://example.com/data.json", Arc::new(CaniuseDataset::default()));
        assert!(cache.get("http://example.com/data.json").is_none());
    }

    #[test]
    fn test_entries_are_keyed_by_url() {
        let cache = DatasetCache::with_ttl(Duration::from_secs(60));
        let dataset = Arc::new(CaniuseDataset::default());
        cache.set("http://a/data.json", dataset.clone());

        let cached = cache.get("http://a/data.json").unwrap();
        assert!(Arc::ptr_eq(&cached, &dataset));
        assert!(cache.get("http://b/data.json").is_none());

    }

    #[test]
    fn test_expired_entries_are_not_returned() {
        let cache = DatasetCache::with_ttl(Duration::from_millis(1));
        cache.set("http://a/data.json", Arc::new(CaniuseDataset::default()));
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get("http://a/data.json").is_none());
    }
}
