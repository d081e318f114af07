//! Dashboard landing page data (GET /dashboard).

use axum::extract::State;
use axum::http::Uri;
use axum::response::Response;
use serde::Serialize;
use uuid::Uuid;

use dashboard_core::invoice::{format_currency, InvoiceWithCustomer};
use dashboard_core::storage::CardData;

use super::page_cache::cached_json;
use super::AppError;
use crate::state::AppState;

/// Invoices shown in the "latest" panel.
const LATEST_INVOICES: u32 = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub cards: Cards,
    pub latest_invoices: Vec<LatestInvoice>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cards {
    pub number_of_customers: u64,
    pub number_of_invoices: u64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

impl From<CardData> for Cards {
    fn from(data: CardData) -> Self {
        Self {
            number_of_customers: data.number_of_customers,
            number_of_invoices: data.number_of_invoices,
            total_paid_invoices: format_currency(data.total_paid_invoices),
            total_pending_invoices: format_currency(data.total_pending_invoices),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestInvoice {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: String,
}

impl From<InvoiceWithCustomer> for LatestInvoice {
    fn from(invoice: InvoiceWithCustomer) -> Self {
        Self {
            id: invoice.id,
            name: invoice.name,
            email: invoice.email,
            image_url: invoice.image_url,
            amount: format_currency(invoice.amount),
        }
    }
}

pub async fn overview(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    let invoices = &state.invoices;

    cached_json(&state, &uri, move || async move {
        let (cards, latest) = tokio::try_join!(
            invoices.card_data(),
            invoices.fetch_latest_invoices(LATEST_INVOICES),
        )?;

        Ok::<_, AppError>(Overview {
            cards: cards.into(),
            latest_invoices: latest.into_iter().map(LatestInvoice::from).collect(),
        })
    })
    .await
}
