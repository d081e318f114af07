use chrono::{DateTime, Duration, Utc};
use rand::{distr::Alphanumeric, Rng};

use super::{AuthError, Session, SessionId};

/// Error code for a rejected email/password pair.
pub const CREDENTIALS_SIGNIN: &str = "CredentialsSignin";
/// Error code for any other sign-in failure.
pub const CALLBACK_ROUTE_ERROR: &str = "CallbackRouteError";

/// Generate a cryptographically random session ID.
pub fn generate_session_id() -> SessionId {
    let id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    SessionId::new(id)
}

/// Check if a session has expired.
pub fn is_session_expired(session: &Session, now: DateTime<Utc>) -> bool {
    session.expires_at <= now
}

/// Calculate session expiry from creation time and TTL.
pub fn calculate_expiry(created_at: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    created_at + ttl
}

/// Maps a sign-in failure onto the error code carried back to the login page.
pub fn sign_in_error_code(error: &AuthError) -> &'static str {
    match error {
        AuthError::InvalidCredentials => CREDENTIALS_SIGNIN,
        _ => CALLBACK_ROUTE_ERROR,
    }
}

/// User-facing message for a login page `error` code.
///
/// Unknown codes still produce the generic message; an absent code produces none.
pub fn sign_in_error_message(code: Option<&str>) -> Option<&'static str> {
    match code? {
        "" => None,
        CREDENTIALS_SIGNIN => Some("Invalid credentials."),
        _ => Some("Something went wrong."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn session_expiring_at(created_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Session {
        Session {
            id: generate_session_id(),
            user_id: Uuid::new_v4(),
            created_at,
            expires_at,
        }
    }

    #[test]
    fn generate_session_id_produces_32_char_alphanumeric() {
        let id = generate_session_id();
        assert_eq!(id.as_str().len(), 32);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generate_session_id_is_unique() {
        assert_ne!(generate_session_id(), generate_session_id());
    }

    #[test]
    fn session_with_future_expiry_is_live() {
        let now = Utc::now();
        let session = session_expiring_at(now, now + Duration::hours(1));
        assert!(!is_session_expired(&session, now));
    }

    #[test]
    fn session_expires_at_exact_expiry() {
        let now = Utc::now();
        let session = session_expiring_at(now - Duration::hours(1), now);
        assert!(is_session_expired(&session, now));
    }

    #[test]
    fn calculate_expiry_adds_ttl() {
        let created = Utc::now();
        assert_eq!(
            calculate_expiry(created, Duration::days(30)),
            created + Duration::days(30)
        );
    }

    #[test]
    fn invalid_credentials_map_to_credentials_signin() {
        assert_eq!(
            sign_in_error_code(&AuthError::InvalidCredentials),
            CREDENTIALS_SIGNIN
        );
        assert_eq!(
            sign_in_error_code(&AuthError::Storage("db down".into())),
            CALLBACK_ROUTE_ERROR
        );
        assert_eq!(
            sign_in_error_code(&AuthError::Password("bad hash".into())),
            CALLBACK_ROUTE_ERROR
        );
    }

    #[test]
    fn error_codes_map_to_messages() {
        assert_eq!(
            sign_in_error_message(Some(CREDENTIALS_SIGNIN)),
            Some("Invalid credentials.")
        );
        assert_eq!(
            sign_in_error_message(Some(CALLBACK_ROUTE_ERROR)),
            Some("Something went wrong.")
        );
        assert_eq!(
            sign_in_error_message(Some("Whatever")),
            Some("Something went wrong.")
        );
        assert_eq!(sign_in_error_message(Some("")), None);
        assert_eq!(sign_in_error_message(None), None);
    }
}
