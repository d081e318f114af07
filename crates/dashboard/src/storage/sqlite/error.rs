//! SQLite error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `dashboard_core::storage`.
//! Constraint violations become semantic variants (UNIQUE to AlreadyExists,
//! FOREIGN KEY and CHECK to InvalidData).

use dashboard_core::storage::RepositoryError;
use sqlx::error::ErrorKind;

/// Maps a sqlx error for the entity identified by `id`.
pub fn map_sqlx_error(err: sqlx::Error, entity_type: &'static str, id: &str) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => RepositoryError::AlreadyExists {
                entity_type,
                id: id.to_string(),
            },
            ErrorKind::ForeignKeyViolation => RepositoryError::InvalidData(format!(
                "Foreign key constraint violation for {entity_type}"
            )),
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                RepositoryError::InvalidData(format!("{entity_type}: {db_err}"))
            }
            _ => RepositoryError::QueryFailed(err.to_string()),
        },
        sqlx::Error::RowNotFound => RepositoryError::not_found(entity_type, id),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::ConnectionFailed(err.to_string())
        }
        sqlx::Error::Decode(_) | sqlx::Error::ColumnDecode { .. } => {
            RepositoryError::Serialization(err.to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a sqlx error where no single entity ID applies.
pub fn map_query_error(err: sqlx::Error, entity_type: &'static str) -> RepositoryError {
    map_sqlx_error(err, entity_type, "unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_preserves_id() {
        let result = map_sqlx_error(sqlx::Error::RowNotFound, "Invoice", "abc-123");

        match result {
            RepositoryError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Invoice");
                assert_eq!(id, "abc-123");
            }
            other => panic!("Expected NotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_pool_errors_map_to_connection_failed() {
        assert!(matches!(
            map_query_error(sqlx::Error::PoolTimedOut, "Customer"),
            RepositoryError::ConnectionFailed(_)
        ));
        assert!(matches!(
            map_query_error(sqlx::Error::PoolClosed, "Customer"),
            RepositoryError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_decode_maps_to_serialization() {
        let err = sqlx::Error::Decode("bad column".into());
        assert!(matches!(
            map_query_error(err, "Invoice"),
            RepositoryError::Serialization(_)
        ));
    }

    #[test]
    fn test_other_errors_map_to_query_failed() {
        let err = sqlx::Error::Protocol("unexpected".to_string());
        assert!(matches!(
            map_query_error(err, "User"),
            RepositoryError::QueryFailed(_)
        ));
    }
}
