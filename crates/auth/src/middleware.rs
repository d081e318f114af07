//! Route-level authorization.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use dashboard_core::auth::{authorize, is_gated_path, login_redirect, Authorization};

use crate::extractors::optional_user;
use crate::AuthState;

/// Gates every matched path behind the authorization predicate.
///
/// Install with `axum::middleware::from_fn_with_state(auth_state, require_authorization)`.
/// Anonymous requests to the dashboard are sent to the login page with the
/// original path and query as `callbackUrl`; signed-in users are kept off
/// the public pages.
pub async fn require_authorization(
    State(auth): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    if !is_gated_path(&path) {
        return next.run(request).await;
    }

    let user = optional_user(&auth, request.headers()).await;

    match authorize(user.is_some(), &path) {
        Authorization::Allow => next.run(request).await,
        Authorization::Deny => {
            let callback = request
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or(&path);
            tracing::debug!(path = %path, "Anonymous request sent to login");
            Redirect::to(&login_redirect(callback)).into_response()
        }
        Authorization::Redirect(to) => {
            tracing::debug!(path = %path, to = %to, "Signed-in user redirected");
            Redirect::to(&to).into_response()
        }
    }
}
