use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidInvoice;

/// Payment status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// Parses the exact lowercase form value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A billing record with customer, amount, status and date.
///
/// `amount` is stored in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

impl Invoice {
    /// Creates a new invoice with a generated ID.
    pub fn new(customer_id: Uuid, amount: i64, status: InvoiceStatus, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            amount,
            status,
            date,
        }
    }

    /// Builds a new invoice from a validated form, dated `date`.
    pub fn from_valid(valid: ValidInvoice, date: NaiveDate) -> Self {
        Self::new(
            valid.customer_id,
            valid.amount_in_cents,
            valid.status,
            date,
        )
    }
}

/// A customer that invoices are billed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            image_url: String::new(),
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}

/// Read model for invoice tables: an invoice joined with its customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceWithCustomer {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
    pub name: String,
    pub email: String,
    pub image_url: String,
}
