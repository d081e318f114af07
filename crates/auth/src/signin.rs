//! Credential sign-in.

use chrono::Utc;
use dashboard_core::auth::{
    calculate_expiry, generate_session_id, validate_credentials, AuthError as CoreError,
    CredentialsForm, Session, User,
};
use uuid::Uuid;

use crate::password::verify_password;
use crate::{AuthError, AuthState};

/// Checks a login submission against the user store.
///
/// Malformed input, an unknown email and a wrong password all come back as
/// `InvalidCredentials`; store and hashing failures keep their own variants.
pub async fn authenticate(state: &AuthState, form: &CredentialsForm) -> Result<User, AuthError> {
    let Some(credentials) = validate_credentials(form) else {
        tracing::debug!("Rejected malformed credentials");
        return Err(CoreError::InvalidCredentials.into());
    };

    let Some(user) = state.users.get_user_by_email(&credentials.email).await? else {
        tracing::debug!(email = %credentials.email, "Unknown email");
        return Err(CoreError::InvalidCredentials.into());
    };

    if !verify_password(credentials.password, user.password_hash.clone()).await? {
        tracing::debug!(user_id = %user.id, "Password mismatch");
        return Err(CoreError::InvalidCredentials.into());
    }

    Ok(user)
}

/// Creates and stores a fresh session for `user_id`.
pub async fn start_session(state: &AuthState, user_id: Uuid) -> Result<Session, AuthError> {
    let now = Utc::now();
    let session = Session {
        id: generate_session_id(),
        user_id,
        created_at: now,
        expires_at: calculate_expiry(now, state.config.session_ttl_chrono()),
    };
    state.sessions.create_session(&session).await?;

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{auth_state, DEMO_EMAIL, DEMO_PASSWORD};

    fn form(email: &str, password: &str) -> CredentialsForm {
        CredentialsForm {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            redirect_to: None,
        }
    }

    #[tokio::test]
    async fn valid_credentials_return_the_user() {
        let (state, user) = auth_state().await;

        let found = authenticate(&state, &form(DEMO_EMAIL, DEMO_PASSWORD))
            .await
            .unwrap();
        assert_eq!(found.id, user.id);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let (state, _) = auth_state().await;

        let err = authenticate(&state, &form(DEMO_EMAIL, "wrong-password"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Core(CoreError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let (state, _) = auth_state().await;

        let err = authenticate(&state, &form("nobody@nextmail.com", DEMO_PASSWORD))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Core(CoreError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn short_password_never_reaches_the_store() {
        let (state, _) = auth_state().await;

        let err = authenticate(&state, &form(DEMO_EMAIL, "123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Core(CoreError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn start_session_stores_a_live_session() {
        let (state, user) = auth_state().await;

        let session = start_session(&state, user.id).await.unwrap();
        let stored = state.sessions.get_session(&session.id).await.unwrap().unwrap();

        assert_eq!(stored.user_id, user.id);
        assert!(stored.expires_at > Utc::now());
    }
}
