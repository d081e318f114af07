use axum::http::StatusCode;

/// Liveness probe (GET /livez).
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
