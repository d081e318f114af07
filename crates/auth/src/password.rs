//! bcrypt hashing, run on the blocking pool.

use dashboard_core::auth::AuthError as CoreError;

use crate::AuthError;

/// Work factor for new hashes.
pub const HASH_COST: u32 = 10;

/// Hashes `password` with the given bcrypt cost.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| CoreError::Password(e.to_string()))?
        .map_err(|e| CoreError::Password(e.to_string()).into())
}

/// Checks `password` against a stored bcrypt hash.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| CoreError::Password(e.to_string()))?
        .map_err(|e| CoreError::Password(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify() {
        let hash = hash_password("123456".to_string(), 4).await.unwrap();

        assert!(hash.starts_with("$2"));
        assert!(verify_password("123456".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("654321".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        let result = verify_password("123456".to_string(), "not-a-hash".to_string()).await;
        assert!(matches!(
            result,
            Err(AuthError::Core(CoreError::Password(_)))
        ));
    }
}
