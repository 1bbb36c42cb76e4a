use parking_lot::RwLock;
use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

struct CacheEntry<V> {
    stored_at: Instant,
    value: V,
}

/// In-memory cache whose entries expire `ttl` after they were stored. Only successful fetches
/// are stored, so a failed upstream call is retried on the next request.
pub struct TtlCache<V> {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.entries
            .read()
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    pub fn insert(&self, key: impl Into<String>, value: V) {
        let mut entries = self.entries.write();
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        entries.insert(
            key.into(),
            CacheEntry {
                stored_at: Instant::now(),
                value,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub async fn get_or_try_insert_with<F, Fut, E>(&self, key: &str, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key) {
            trace!(name: "cache.hit", key = key, "serving cached value");
            return Ok(value);
        }

        debug!(name: "cache.miss", key = key, "cache miss, fetching");
        let value = fetch().await?;
        self.insert(key, value.clone());
        trace!(name: "cache.stored", key = key, entries = self.len(), "stored fetched value");
        Ok(value)
    }
}
