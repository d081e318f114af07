//! SQLite storage backend.
//!
//! Implements the repository traits from `dashboard_core::storage` on a
//! `sqlx` connection pool. Sessions live in the same database through
//! `dashboard_auth::SqliteSessionStore`.

mod conversions;
mod error;
mod repository;
mod schema;

use std::str::FromStr;

use dashboard_core::storage::{RepositoryError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub use repository::SqliteRepository;

/// Opens a pool for `url`, creating the database file if needed.
///
/// In-memory databases get a single connection that is never recycled,
/// otherwise every new connection would see an empty database.
pub async fn connect(url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_in_memory(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    pool.connect_with(options)
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
