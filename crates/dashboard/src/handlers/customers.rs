use axum::extract::State;
use axum::http::Uri;
use axum::response::Response;
use serde::Serialize;

use dashboard_core::invoice::Customer;

use super::page_cache::cached_json;
use super::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CustomerList {
    pub customers: Vec<Customer>,
}

/// Customers ordered by name (GET /dashboard/customers).
pub async fn list_customers(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let repo = &state.customers;

    cached_json(&state, &uri, move || async move {
        let customers = repo.fetch_customers().await?;
        Ok::<_, AppError>(CustomerList { customers })
    })
    .await
}
