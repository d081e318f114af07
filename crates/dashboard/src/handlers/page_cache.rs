//! Read-through cache for dashboard JSON pages.

use std::future::Future;

use axum::http::{header, HeaderName, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use dashboard_core::cache::page_key;

use super::AppError;
use crate::state::AppState;

static X_CACHE: HeaderName = HeaderName::from_static("x-cache");

/// Serves the page for `uri` from cache, or builds it with `load` and caches it.
///
/// A cache that fails to answer is treated as a miss.
pub async fn cached_json<T, F, Fut>(
    state: &AppState,
    uri: &Uri,
    load: F,
) -> Result<Response, AppError>
where
    T: Serialize,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let key = page_key(uri.path(), uri.query());

    match state.cache.get(&key).await {
        Ok(Some(body)) => return Ok(json_response(body, "hit")),
        Ok(None) => {}
        Err(e) => tracing::warn!(key = %key, error = %e, "Page cache read failed"),
    }

    let body = serde_json::to_vec(&load().await?)?;

    if let Err(e) = state.cache.set(&key, &body, Some(state.page_ttl)).await {
        tracing::warn!(key = %key, error = %e, "Page cache write failed");
    }

    Ok(json_response(body, "miss"))
}

fn json_response(body: Vec<u8>, cache_status: &'static str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/json"),
            (X_CACHE.clone(), cache_status),
        ],
        body,
    )
        .into_response()
}
