//! SQLite session storage implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use dashboard_core::auth::{AuthError, Result, Session, SessionId, SessionRepository};

/// SQLite-backed session storage.
#[derive(Debug, Clone)]
pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the sessions table if it does not exist.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS sessions (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                created_at TEXT NOT NULL,
                expires_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_sessions_user_id ON sessions(user_id);
            CREATE INDEX IF NOT EXISTS idx_sessions_expires_at ON sessions(expires_at);
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        Ok(())
    }

    /// Deletes sessions whose expiry has passed. Returns how many were removed.
    pub async fn purge_expired(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        Ok(result.rows_affected())
    }
}

fn storage(e: sqlx::Error) -> AuthError {
    AuthError::Storage(e.to_string())
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AuthError::Storage(e.to_string()))
}

#[async_trait]
impl SessionRepository for SqliteSessionStore {
    async fn create_session(&self, session: &Session) -> Result<()> {
        sqlx::query(
            "INSERT INTO sessions (id, user_id, created_at, expires_at) VALUES (?, ?, ?, ?)",
        )
        .bind(session.id.as_str())
        .bind(session.user_id.to_string())
        .bind(session.created_at.to_rfc3339())
        .bind(session.expires_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        Ok(())
    }

    async fn get_session(&self, id: &SessionId) -> Result<Option<Session>> {
        let row = sqlx::query_as::<_, (String, String, String, String)>(
            "SELECT id, user_id, created_at, expires_at FROM sessions WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;

        let Some((id, user_id, created_at, expires_at)) = row else {
            return Ok(None);
        };

        Ok(Some(Session {
            id: SessionId::new(id),
            user_id: Uuid::parse_str(&user_id).map_err(|e| AuthError::Storage(e.to_string()))?,
            created_at: parse_timestamp(&created_at)?,
            expires_at: parse_timestamp(&expires_at)?,
        }))
    }

    async fn delete_session(&self, id: &SessionId) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        Ok(())
    }

    async fn delete_user_sessions(&self, user_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn store() -> SqliteSessionStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let store = SqliteSessionStore::new(pool);
        store.migrate().await.unwrap();
        store
    }

    fn session(id: &str, user_id: Uuid, ttl: Duration) -> Session {
        let now = Utc::now();
        Session {
            id: SessionId::new(id.to_string()),
            user_id,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    #[tokio::test]
    async fn round_trips_a_session() {
        let store = store().await;
        let original = session("abc", Uuid::new_v4(), Duration::days(7));
        store.create_session(&original).await.unwrap();

        let found = store.get_session(&original.id).await.unwrap().unwrap();
        assert_eq!(found.id, original.id);
        assert_eq!(found.user_id, original.user_id);
        assert_eq!(found.expires_at.timestamp(), original.expires_at.timestamp());
    }

    #[tokio::test]
    async fn missing_session_is_none() {
        let store = store().await;
        let found = store
            .get_session(&SessionId::new("missing".to_string()))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let store = store().await;
        store.migrate().await.unwrap();
    }

    #[tokio::test]
    async fn delete_user_sessions_and_purge() {
        let store = store().await;
        let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
        store
            .create_session(&session("a1", alice, Duration::days(1)))
            .await
            .unwrap();
        store
            .create_session(&session("b1", bob, Duration::days(1)))
            .await
            .unwrap();
        store
            .create_session(&session("b2", bob, Duration::days(-1)))
            .await
            .unwrap();

        store.delete_user_sessions(alice).await.unwrap();
        assert!(store
            .get_session(&SessionId::new("a1".to_string()))
            .await
            .unwrap()
            .is_none());

        assert_eq!(store.purge_expired().await.unwrap(), 1);
        assert!(store
            .get_session(&SessionId::new("b1".to_string()))
            .await
            .unwrap()
            .is_some());
    }
}
