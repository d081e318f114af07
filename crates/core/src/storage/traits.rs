use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::User;
use crate::invoice::{Customer, Invoice, InvoiceWithCustomer, ValidInvoice};

use super::{CardData, Page, Result};

/// Repository for invoice operations.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Inserts a new invoice.
    async fn create_invoice(&self, invoice: &Invoice) -> Result<()>;

    /// Overwrites customer, amount and status of an existing invoice.
    ///
    /// The invoice date is left untouched. Fails with `NotFound` when no
    /// row has the given ID.
    async fn update_invoice(&self, id: Uuid, invoice: &ValidInvoice) -> Result<()>;

    /// Deletes an invoice by its ID. Fails with `NotFound` when no row has
    /// the given ID.
    async fn delete_invoice(&self, id: Uuid) -> Result<()>;

    /// Gets an invoice by its ID.
    async fn get_invoice(&self, id: Uuid) -> Result<Option<Invoice>>;

    /// One page of invoices matching `query`, newest first.
    async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: Page,
    ) -> Result<Vec<InvoiceWithCustomer>>;

    /// Number of pages of invoices matching `query`.
    async fn fetch_invoice_pages(&self, query: &str) -> Result<u32>;

    /// The most recent invoices.
    async fn fetch_latest_invoices(&self, limit: u32) -> Result<Vec<InvoiceWithCustomer>>;

    /// Counts and totals for the dashboard overview.
    async fn card_data(&self) -> Result<CardData>;
}

/// Repository for customer operations.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers ordered by name.
    async fn fetch_customers(&self) -> Result<Vec<Customer>>;

    /// Inserts a new customer.
    async fn create_customer(&self, customer: &Customer) -> Result<()>;
}

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their ID.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>>;

    /// Gets a user by their email address.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Creates a new user.
    async fn create_user(&self, user: &User) -> Result<()>;
}
