//! SQLite row conversion functions.
//!
//! Rows are fetched as tuples of primitive columns and converted here, so
//! the parsing is testable without a database.

use chrono::NaiveDate;
use dashboard_core::auth::User;
use dashboard_core::invoice::{Customer, Invoice, InvoiceStatus, InvoiceWithCustomer};
use dashboard_core::storage::RepositoryError;
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Columns: id, customer_id, amount, status, date
pub type InvoiceRow = (String, String, i64, String, String);

/// Columns: id, customer_id, amount, status, date, name, email, image_url
pub type InvoiceWithCustomerRow = (
    String,
    String,
    i64,
    String,
    String,
    String,
    String,
    String,
);

/// Columns: id, name, email, image_url
pub type CustomerRow = (String, String, String, String);

/// Columns: id, name, email, password_hash
pub type UserRow = (String, String, String, String);

type Result<T> = std::result::Result<T, RepositoryError>;

pub fn row_to_invoice(row: InvoiceRow) -> Result<Invoice> {
    let (id, customer_id, amount, status, date) = row;

    Ok(Invoice {
        id: parse_uuid(&id)?,
        customer_id: parse_uuid(&customer_id)?,
        amount,
        status: parse_status(&status)?,
        date: parse_date(&date)?,
    })
}

pub fn row_to_invoice_with_customer(row: InvoiceWithCustomerRow) -> Result<InvoiceWithCustomer> {
    let (id, customer_id, amount, status, date, name, email, image_url) = row;

    Ok(InvoiceWithCustomer {
        id: parse_uuid(&id)?,
        customer_id: parse_uuid(&customer_id)?,
        amount,
        status: parse_status(&status)?,
        date: parse_date(&date)?,
        name,
        email,
        image_url,
    })
}

pub fn row_to_customer(row: CustomerRow) -> Result<Customer> {
    let (id, name, email, image_url) = row;

    Ok(Customer {
        id: parse_uuid(&id)?,
        name,
        email,
        image_url,
    })
}

pub fn row_to_user(row: UserRow) -> Result<User> {
    let (id, name, email, password_hash) = row;

    Ok(User {
        id: parse_uuid(&id)?,
        name,
        email,
        password_hash,
    })
}

/// Format a date for storage.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_uuid(s: &str) -> Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| RepositoryError::Serialization(format!("invalid uuid {s:?}: {e}")))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| RepositoryError::Serialization(format!("invalid date {s:?}: {e}")))
}

fn parse_status(s: &str) -> Result<InvoiceStatus> {
    InvoiceStatus::parse(s)
        .ok_or_else(|| RepositoryError::InvalidData(format!("unknown invoice status {s:?}")))
}
