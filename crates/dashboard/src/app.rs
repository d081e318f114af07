use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use dashboard_auth::{auth_routes, require_authorization};

use crate::{
    handlers::{
        customers::list_customers,
        health::livez,
        invoices::{
            create_invoice, create_invoice_page, delete_invoice, edit_invoice_page, list_invoices,
            update_invoice,
        },
        login::login_page,
        overview::overview,
        root::index,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/login", get(login_page))
        .route("/livez", get(livez))
        // Dashboard (gated)
        .route("/dashboard", get(overview))
        .route("/dashboard/customers", get(list_customers))
        .route(
            "/dashboard/invoices",
            get(list_invoices).post(create_invoice),
        )
        .route("/dashboard/invoices/create", get(create_invoice_page))
        .route(
            "/dashboard/invoices/{id}/edit",
            get(edit_invoice_page).post(update_invoice),
        )
        .route("/dashboard/invoices/{id}/delete", post(delete_invoice))
        .merge(auth_routes())
        .layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_authorization,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
