use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dashboard_core::auth::{sign_in_error_code, CALLBACK_ROUTE_ERROR};
use dashboard_core::storage::{repository_error_to_status_code, RepositoryError};
use thiserror::Error;

/// Auth errors for the dashboard_auth crate.
///
/// Wraps the core `AuthError` and the repository errors raised while
/// looking users up.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Core(#[from] dashboard_core::auth::AuthError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AuthError {
    /// The error code the login page understands.
    pub fn sign_in_code(&self) -> &'static str {
        match self {
            AuthError::Core(core_err) => sign_in_error_code(core_err),
            AuthError::Repository(_) => CALLBACK_ROUTE_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        use dashboard_core::auth::AuthError as CoreError;

        let (status, message) = match &self {
            AuthError::Core(core_err) => match core_err {
                CoreError::InvalidCredentials
                | CoreError::SessionNotFound
                | CoreError::SessionExpired => (StatusCode::UNAUTHORIZED, self.to_string()),
                CoreError::Storage(_) | CoreError::Password(_) => {
                    tracing::error!("Auth error: {}", self);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
            AuthError::Repository(repo_err) => {
                tracing::error!("User lookup failed: {}", repo_err);
                let status = StatusCode::from_u16(repository_error_to_status_code(repo_err))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, "User lookup failed".to_string())
            }
        };

        (status, message).into_response()
    }
}
