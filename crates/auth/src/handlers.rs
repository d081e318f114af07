//! HTTP handlers for auth routes.

use axum::{
    extract::{FromRef, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use dashboard_core::auth::{
    login_redirect, validate_return_to, CredentialsForm, Session, User, DASHBOARD_PATH, LOGIN_PATH,
};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::extractors::{session_id_from_headers, CurrentUser};
use crate::signin::{authenticate, start_session};
use crate::AuthState;

/// Creates the auth router.
///
/// Routes:
/// - `POST /auth/login` - Sign in with email and password
/// - `POST /auth/logout` - End current session
/// - `POST /auth/logout-all` - End all sessions for current user
/// - `GET /auth/me` - Get current authenticated user
pub fn auth_routes<S>() -> Router<S>
where
    AuthState: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/logout-all", post(logout_all))
        .route("/auth/me", get(me))
}

async fn login(
    State(state): State<AuthState>,
    jar: CookieJar,
    Form(form): Form<CredentialsForm>,
) -> Response {
    let redirect_to = form
        .redirect_to
        .as_deref()
        .and_then(validate_return_to)
        .map(String::from);

    let signed_in = match authenticate(&state, &form).await {
        Ok(user) => start_session(&state, user.id).await,
        Err(e) => Err(e),
    };

    match signed_in {
        Ok(session) => {
            tracing::info!(user_id = %session.user_id, "User signed in");
            let jar = jar.add(session_cookie(&state.config, &session));
            let target = redirect_to.as_deref().unwrap_or(DASHBOARD_PATH);
            (jar, Redirect::to(target)).into_response()
        }
        Err(e) => {
            match &e {
                AuthError::Core(dashboard_core::auth::AuthError::InvalidCredentials) => {
                    tracing::info!("Sign-in rejected: invalid credentials");
                }
                _ => tracing::error!(error = %e, "Sign-in failed"),
            }
            Redirect::to(&sign_in_failure_url(e.sign_in_code(), redirect_to.as_deref()))
                .into_response()
        }
    }
}

/// Login page URL carrying the error code and the original callback.
fn sign_in_failure_url(code: &str, callback: Option<&str>) -> String {
    match callback {
        Some(callback) => format!("{}&error={code}", login_redirect(callback)),
        None => format!("{LOGIN_PATH}?error={code}"),
    }
}

fn session_cookie(config: &AuthConfig, session: &Session) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), session.id.to_string()))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(config.session_ttl.as_secs() as i64))
        .build()
}

fn removal_cookie(config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), "")).path("/").build()
}

async fn logout(
    State(state): State<AuthState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), AuthError> {
    if let Some(session_id) = session_id_from_headers(&headers, &state.config.cookie_name) {
        state.sessions.delete_session(&session_id).await?;
    }

    let jar = jar.remove(removal_cookie(&state.config));
    Ok((jar, Redirect::to("/")))
}

async fn logout_all(
    State(state): State<AuthState>,
    CurrentUser(user): CurrentUser,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), AuthError> {
    state.sessions.delete_user_sessions(user.id).await?;
    tracing::info!(user_id = %user.id, "Signed out everywhere");

    let jar = jar.remove(removal_cookie(&state.config));
    Ok((jar, Redirect::to("/")))
}

async fn me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}
