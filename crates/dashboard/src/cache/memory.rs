//! In-memory page cache with LRU eviction and TTL.
//!
//! Entries expire lazily: an expired entry is dropped the next time it is
//! read. Path revalidation scans the keys, which is fine at the sizes a
//! single dashboard instance holds.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use dashboard_core::cache::{key_in_path, Cache, Result};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }
}

/// Thread-safe LRU cache shared across handlers.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a cache holding at most `max_entries` pages. Zero is treated as one.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.write().await;

        let expired = match store.get(key) {
            Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
            Some(_) => true,
            None => false,
        };

        if expired {
            store.pop(key);
        }

        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }

    async fn revalidate_path(&self, path: &str) -> Result<usize> {
        let mut store = self.store.write().await;
        let keys: Vec<String> = store
            .iter()
            .filter(|(key, _)| key_in_path(key, path))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &keys {
            store.pop(key);
        }

        tracing::debug!(path = %path, removed = keys.len(), "Revalidated cached pages");
        Ok(keys.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::cache::page_key;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new(10);
        cache.set("page:/dashboard", b"cards", None).await.unwrap();

        assert_eq!(
            cache.get("page:/dashboard").await.unwrap(),
            Some(b"cards".to_vec())
        );
        assert_eq!(cache.get("page:/missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ttl_expiry() {
        let cache = MemoryCache::new(10);
        cache
            .set("page:/dashboard", b"cards", Some(Duration::from_millis(10)))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(cache.get("page:/dashboard").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let cache = MemoryCache::new(2);
        cache.set("a", b"1", None).await.unwrap();
        cache.set("b", b"2", None).await.unwrap();
        cache.get("a").await.unwrap();
        cache.set("c", b"3", None).await.unwrap();

        assert!(cache.get("a").await.unwrap().is_some());
        assert!(cache.get("b").await.unwrap().is_none());
        assert!(cache.get("c").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_zero_capacity_still_caches() {
        let cache = MemoryCache::new(0);
        cache.set("a", b"1", None).await.unwrap();
        assert!(cache.get("a").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_revalidate_path_drops_path_and_children() {
        let cache = MemoryCache::new(10);
        let keys = [
            page_key("/dashboard/invoices", None),
            page_key("/dashboard/invoices", Some("query=lee&page=2")),
            page_key("/dashboard/invoices/create", None),
            page_key("/dashboard", None),
            page_key("/dashboard/customers", None),
        ];
        for key in &keys {
            cache.set(key, b"x", None).await.unwrap();
        }

        let removed = cache.revalidate_path("/dashboard/invoices").await.unwrap();

        assert_eq!(removed, 3);
        assert!(cache.get(&keys[3]).await.unwrap().is_some());
        assert!(cache.get(&keys[4]).await.unwrap().is_some());
    }
}
