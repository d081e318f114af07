//! Invoice pages and mutations under `/dashboard/invoices`.
//!
//! Reads return JSON through the page cache. Mutations validate the form,
//! write through the repository, revalidate the invoice pages and redirect
//! back to the table. A failed mutation answers with a [`FormState`] the
//! form can render next to its fields.

use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dashboard_core::invoice::{
    cents_to_dollars, format_currency, validate_invoice_form, Customer, FormState, Invoice,
    InvoiceAction, InvoiceForm, InvoiceStatus, InvoiceWithCustomer, DELETED_INVOICE,
};
use dashboard_core::serde::{deserialize_optional_string, deserialize_page};
use dashboard_core::storage::{repository_error_to_status_code, Page, RepositoryError};

use super::flash::{redirect_with_flash, FlashMessage};
use super::page_cache::cached_json;
use super::AppError;
use crate::state::AppState;

/// The invoice table. Every mutation lands back here.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

// ============================================================================
// Reads
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct InvoiceSearch {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub query: Option<String>,
    #[serde(default, deserialize_with = "deserialize_page")]
    pub page: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTable {
    pub query: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub invoices: Vec<InvoiceTableRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTableRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: String,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
}

impl From<InvoiceWithCustomer> for InvoiceTableRow {
    fn from(invoice: InvoiceWithCustomer) -> Self {
        Self {
            id: invoice.id,
            name: invoice.name,
            email: invoice.email,
            image_url: invoice.image_url,
            amount: format_currency(invoice.amount),
            date: invoice.date,
            status: invoice.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateInvoicePage {
    pub customers: Vec<Customer>,
}

#[derive(Debug, Serialize)]
pub struct EditInvoicePage {
    pub invoice: EditableInvoice,
    pub customers: Vec<Customer>,
}

/// An invoice as the edit form shows it, amount in dollars.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableInvoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl From<Invoice> for EditableInvoice {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
            customer_id: invoice.customer_id,
            amount: cents_to_dollars(invoice.amount),
            status: invoice.status,
        }
    }
}

/// Filtered, paginated invoice table (GET /dashboard/invoices?query=&page=).
pub async fn list_invoices(
    State(state): State<AppState>,
    uri: Uri,
    Query(search): Query<InvoiceSearch>,
) -> Result<Response, AppError> {
    let repo = &state.invoices;
    let query = search.query.unwrap_or_default();
    let page = Page::from(search.page);

    cached_json(&state, &uri, move || async move {
        let (invoices, total_pages) = tokio::try_join!(
            repo.fetch_filtered_invoices(&query, page),
            repo.fetch_invoice_pages(&query),
        )?;

        Ok::<_, AppError>(InvoiceTable {
            current_page: page.number(),
            total_pages,
            invoices: invoices.into_iter().map(InvoiceTableRow::from).collect(),
            query,
        })
    })
    .await
}

/// Customers for the create form (GET /dashboard/invoices/create).
pub async fn create_invoice_page(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let repo = &state.customers;

    cached_json(&state, &uri, move || async move {
        let customers = repo.fetch_customers().await?;
        Ok::<_, AppError>(CreateInvoicePage { customers })
    })
    .await
}

/// Invoice and customers for the edit form (GET /dashboard/invoices/{id}/edit).
pub async fn edit_invoice_page(
    State(state): State<AppState>,
    uri: Uri,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_invoice_id(&id)?;
    let (invoice_repo, customer_repo) = (&state.invoices, &state.customers);

    cached_json(&state, &uri, move || async move {
        let (invoice, customers) = tokio::try_join!(
            invoice_repo.get_invoice(id),
            customer_repo.fetch_customers()
        )?;
        let invoice = invoice.ok_or_else(|| RepositoryError::not_found("Invoice", id))?;

        Ok::<_, AppError>(EditInvoicePage {
            invoice: invoice.into(),
            customers,
        })
    })
    .await
}

// ============================================================================
// Mutations
// ============================================================================

/// POST /dashboard/invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    form_result: Result<Form<InvoiceForm>, FormRejection>,
) -> Response {
    let form = match form_result {
        Ok(Form(form)) => form,
        Err(e) => return rejected_form(e),
    };

    let valid = match validate_invoice_form(&form) {
        Ok(valid) => valid,
        Err(errors) => {
            return validation_failed(FormState::validation(errors, InvoiceAction::Create))
        }
    };

    let invoice = Invoice::from_valid(valid, Utc::now().date_naive());

    match state.invoices.create_invoice(&invoice).await {
        Ok(()) => {
            tracing::info!(
                invoice_id = %invoice.id,
                customer_id = %invoice.customer_id,
                "Invoice created"
            );
            state.revalidate(INVOICES_PATH).await;
            Redirect::to(INVOICES_PATH).into_response()
        }
        Err(e) => database_failed(&e, InvoiceAction::Create),
    }
}

/// POST /dashboard/invoices/{id}/edit
///
/// The invoice keeps its original date.
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form_result: Result<Form<InvoiceForm>, FormRejection>,
) -> Response {
    let form = match form_result {
        Ok(Form(form)) => form,
        Err(e) => return rejected_form(e),
    };

    let valid = match validate_invoice_form(&form) {
        Ok(valid) => valid,
        Err(errors) => {
            return validation_failed(FormState::validation(errors, InvoiceAction::Update))
        }
    };

    let result = match parse_invoice_id(&id) {
        Ok(id) => state.invoices.update_invoice(id, &valid).await.map(|()| id),
        Err(e) => Err(e),
    };

    match result {
        Ok(id) => {
            tracing::info!(invoice_id = %id, "Invoice updated");
            state.revalidate(INVOICES_PATH).await;
            Redirect::to(INVOICES_PATH).into_response()
        }
        Err(e) => database_failed(&e, InvoiceAction::Update),
    }
}

/// POST /dashboard/invoices/{id}/delete
///
/// Always redirects to the table; the outcome travels in a flash cookie.
pub async fn delete_invoice(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = match parse_invoice_id(&id) {
        Ok(id) => state.invoices.delete_invoice(id).await.map(|()| id),
        Err(e) => Err(e),
    };

    match result {
        Ok(id) => {
            tracing::info!(invoice_id = %id, "Invoice deleted");
            state.revalidate(INVOICES_PATH).await;
            redirect_with_flash(INVOICES_PATH, FlashMessage::success(DELETED_INVOICE))
        }
        Err(e) => {
            tracing::error!(invoice_id = %id, error = %e, "Failed to delete invoice");
            let message = FormState::database(InvoiceAction::Delete)
                .message
                .unwrap_or_default();
            redirect_with_flash(INVOICES_PATH, FlashMessage::error(message))
        }
    }
}

/// Path IDs that are not UUIDs cannot name a stored invoice.
fn parse_invoice_id(id: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(id).map_err(|_| RepositoryError::not_found("Invoice", id))
}

fn rejected_form(e: FormRejection) -> Response {
    let state = FormState::message(format!("Failed to parse form: {e}"));
    tracing::warn!(status = %StatusCode::BAD_REQUEST, error = %e, "Invoice form rejected");
    (StatusCode::BAD_REQUEST, Json(state)).into_response()
}

fn validation_failed(state: FormState) -> Response {
    tracing::debug!(fields = state.errors.len(), "Invoice form failed validation");
    (StatusCode::UNPROCESSABLE_ENTITY, Json(state)).into_response()
}

/// The cause is logged, never shown.
fn database_failed(error: &RepositoryError, action: InvoiceAction) -> Response {
    let status = StatusCode::from_u16(repository_error_to_status_code(error))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    tracing::error!(status = %status, error = %error, ?action, "Invoice mutation failed");
    (status, Json(FormState::database(action))).into_response()
}
