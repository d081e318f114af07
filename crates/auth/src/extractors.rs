//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use dashboard_core::auth::{is_session_expired, AuthError as CoreError, SessionId, User};

use crate::{AuthError, AuthState};

/// Extractor for authenticated user. Returns 401 if not authenticated.
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        match resolve_user(&auth_state, &parts.headers).await {
            Ok(user) => Ok(CurrentUser(user)),
            Err(AuthError::Core(CoreError::SessionNotFound)) => {
                Err((StatusCode::UNAUTHORIZED, "Not signed in"))
            }
            Err(AuthError::Core(CoreError::SessionExpired)) => {
                Err((StatusCode::UNAUTHORIZED, "Session expired"))
            }
            Err(e) => {
                tracing::error!(error = %e, "Session lookup failed");
                Err((StatusCode::INTERNAL_SERVER_ERROR, "Session lookup failed"))
            }
        }
    }
}

/// Extractor for optionally authenticated user. Returns None if not authenticated.
pub struct OptionalUser(pub Option<User>);

impl<S> FromRequestParts<S> for OptionalUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        Ok(OptionalUser(optional_user(&auth_state, &parts.headers).await))
    }
}

/// Resolves the signed-in user, treating every failure as anonymous.
pub(crate) async fn optional_user(auth: &AuthState, headers: &HeaderMap) -> Option<User> {
    match resolve_user(auth, headers).await {
        Ok(user) => Some(user),
        Err(AuthError::Core(CoreError::SessionNotFound | CoreError::SessionExpired)) => None,
        Err(e) => {
            tracing::warn!(error = %e, "Treating request as anonymous");
            None
        }
    }
}

/// Session ID from a `Bearer` header, falling back to the session cookie.
pub(crate) fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| SessionId::new(token.to_string()));

    bearer.or_else(|| {
        CookieJar::from_headers(headers)
            .get(cookie_name)
            .map(|cookie| SessionId::new(cookie.value().to_string()))
    })
}

async fn resolve_user(auth: &AuthState, headers: &HeaderMap) -> Result<User, AuthError> {
    let session_id = session_id_from_headers(headers, &auth.config.cookie_name)
        .ok_or(CoreError::SessionNotFound)?;

    let session = auth
        .sessions
        .get_session(&session_id)
        .await?
        .ok_or(CoreError::SessionNotFound)?;

    if is_session_expired(&session, Utc::now()) {
        return Err(CoreError::SessionExpired.into());
    }

    let user = auth
        .users
        .get_user(session.user_id)
        .await?
        .ok_or(CoreError::SessionNotFound)?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_header_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        headers.insert("cookie", HeaderValue::from_static("session=from-cookie"));

        let id = session_id_from_headers(&headers, "session").unwrap();
        assert_eq!(id.as_str(), "from-header");
    }

    #[test]
    fn falls_back_to_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert("cookie", HeaderValue::from_static("theme=dark; session=abc"));

        let id = session_id_from_headers(&headers, "session").unwrap();
        assert_eq!(id.as_str(), "abc");
    }

    #[test]
    fn no_credentials_is_none() {
        assert!(session_id_from_headers(&HeaderMap::new(), "session").is_none());
    }
}
