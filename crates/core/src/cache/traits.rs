use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Key-value store for rendered pages.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Drops every cached page at or below `path`. Returns how many were removed.
    async fn revalidate_path(&self, path: &str) -> Result<usize>;
}
