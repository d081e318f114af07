use std::{env, time::Duration};

/// Where login sessions are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBackend {
    /// Alongside the application tables.
    Sqlite,
    /// In process memory; sessions end with the process.
    Memory,
}

impl SessionBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "sqlite" => Some(Self::Sqlite),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL (default: "sqlite://dashboard.db")
    pub database_url: String,
    /// Page cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cached pages (default: 10,000)
    pub cache_max_entries: usize,
    /// Session storage (default: sqlite)
    pub session_backend: SessionBackend,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - SQLite connection URL (default: "sqlite://dashboard.db")
    /// - `CACHE_TTL_SECONDS` - Page cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cached pages (default: 10,000)
    /// - `SESSION_STORE` - `sqlite` or `memory` (default: sqlite)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://dashboard.db".to_string()),
            cache_ttl_seconds: lookup("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            session_backend: lookup("SESSION_STORE")
                .and_then(|v| SessionBackend::parse(&v))
                .unwrap_or(SessionBackend::Sqlite),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}
