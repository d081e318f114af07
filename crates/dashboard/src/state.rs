//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use dashboard_auth::AuthState;
use dashboard_core::cache::Cache;
use dashboard_core::storage::{CustomerRepository, InvoiceRepository};

/// State cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    pub invoices: Arc<dyn InvoiceRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    /// Rendered dashboard reads, keyed by request path and query.
    pub cache: Arc<dyn Cache>,
    pub auth: AuthState,
    /// How long a cached page stays fresh.
    pub page_ttl: Duration,
}

impl AppState {
    pub fn new(
        invoices: Arc<dyn InvoiceRepository>,
        customers: Arc<dyn CustomerRepository>,
        cache: Arc<dyn Cache>,
        auth: AuthState,
        page_ttl: Duration,
    ) -> Self {
        Self {
            invoices,
            customers,
            cache,
            auth,
            page_ttl,
        }
    }

    /// Drops cached pages at or below `path`. Failures are logged, never returned.
    pub async fn revalidate(&self, path: &str) {
        if let Err(e) = self.cache.revalidate_path(path).await {
            tracing::warn!(path = %path, error = %e, "Failed to revalidate cached pages");
        }
    }
}

impl AsRef<AuthState> for AppState {
    fn as_ref(&self) -> &AuthState {
        &self.auth
    }
}
