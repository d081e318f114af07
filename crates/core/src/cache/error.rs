use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            CacheError::OperationFailed("lock poisoned".to_string()).to_string(),
            "Cache operation failed: lock poisoned"
        );
        assert_eq!(
            CacheError::Serialization("invalid JSON".to_string()).to_string(),
            "Serialization error: invalid JSON"
        );
    }
}
