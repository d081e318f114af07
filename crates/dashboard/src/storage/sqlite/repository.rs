//! SQLite repository implementation.
//!
//! Implements the repository traits from `dashboard_core::storage` using SQLite.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use dashboard_core::auth::User;
use dashboard_core::invoice::{Customer, Invoice, InvoiceWithCustomer, ValidInvoice};
use dashboard_core::storage::{
    search_pattern, total_pages, CardData, CustomerRepository, InvoiceRepository, Page,
    RepositoryError, Result, UserRepository, ITEMS_PER_PAGE,
};

use super::conversions::{
    format_date, row_to_customer, row_to_invoice, row_to_invoice_with_customer, row_to_user,
    CustomerRow, InvoiceRow, InvoiceWithCustomerRow, UserRow,
};
use super::error::{map_query_error, map_sqlx_error};
use super::schema;

/// SQLite-based repository for invoices, customers and users.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the application tables if they do not exist.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::raw_sql(schema::CREATE_TABLES)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}

fn expect_affected(rows: u64, entity_type: &'static str, id: Uuid) -> Result<()> {
    if rows == 0 {
        Err(RepositoryError::not_found(entity_type, id))
    } else {
        Ok(())
    }
}

// ============================================================================
// InvoiceRepository implementation
// ============================================================================

#[async_trait]
impl InvoiceRepository for SqliteRepository {
    async fn create_invoice(&self, invoice: &Invoice) -> Result<()> {
        let id = invoice.id.to_string();

        sqlx::query(schema::INSERT_INVOICE)
            .bind(&id)
            .bind(invoice.customer_id.to_string())
            .bind(invoice.amount)
            .bind(invoice.status.as_str())
            .bind(format_date(&invoice.date))
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Invoice", &id))?;

        Ok(())
    }

    async fn update_invoice(&self, id: Uuid, invoice: &ValidInvoice) -> Result<()> {
        let id_str = id.to_string();

        let result = sqlx::query(schema::UPDATE_INVOICE)
            .bind(&id_str)
            .bind(invoice.customer_id.to_string())
            .bind(invoice.amount_in_cents)
            .bind(invoice.status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Invoice", &id_str))?;

        expect_affected(result.rows_affected(), "Invoice", id)
    }

    async fn delete_invoice(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        let result = sqlx::query(schema::DELETE_INVOICE)
            .bind(&id_str)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Invoice", &id_str))?;

        expect_affected(result.rows_affected(), "Invoice", id)
    }

    async fn get_invoice(&self, id: Uuid) -> Result<Option<Invoice>> {
        let id_str = id.to_string();

        let row = sqlx::query_as::<_, InvoiceRow>(schema::SELECT_INVOICE_BY_ID)
            .bind(&id_str)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Invoice", &id_str))?;

        row.map(row_to_invoice).transpose()
    }

    async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: Page,
    ) -> Result<Vec<InvoiceWithCustomer>> {
        let rows = sqlx::query_as::<_, InvoiceWithCustomerRow>(schema::SELECT_FILTERED_INVOICES)
            .bind(search_pattern(query))
            .bind(i64::from(ITEMS_PER_PAGE))
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Invoice"))?;

        rows.into_iter().map(row_to_invoice_with_customer).collect()
    }

    async fn fetch_invoice_pages(&self, query: &str) -> Result<u32> {
        let (count,): (i64,) = sqlx::query_as(schema::COUNT_FILTERED_INVOICES)
            .bind(search_pattern(query))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Invoice"))?;

        Ok(total_pages(count.max(0) as u64))
    }

    async fn fetch_latest_invoices(&self, limit: u32) -> Result<Vec<InvoiceWithCustomer>> {
        let rows = sqlx::query_as::<_, InvoiceWithCustomerRow>(schema::SELECT_LATEST_INVOICES)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Invoice"))?;

        rows.into_iter().map(row_to_invoice_with_customer).collect()
    }

    async fn card_data(&self) -> Result<CardData> {
        let invoice_count = sqlx::query_as::<_, (i64,)>(schema::COUNT_INVOICES)
            .fetch_one(&self.pool);
        let customer_count = sqlx::query_as::<_, (i64,)>(schema::COUNT_CUSTOMERS)
            .fetch_one(&self.pool);
        let totals = sqlx::query_as::<_, (i64, i64)>(schema::SUM_INVOICES_BY_STATUS)
            .fetch_one(&self.pool);

        let ((invoices,), (customers,), (paid, pending)) =
            tokio::try_join!(invoice_count, customer_count, totals)
                .map_err(|e| map_query_error(e, "Invoice"))?;

        Ok(CardData {
            number_of_customers: customers.max(0) as u64,
            number_of_invoices: invoices.max(0) as u64,
            total_paid_invoices: paid,
            total_pending_invoices: pending,
        })
    }
}

// ============================================================================
// CustomerRepository implementation
// ============================================================================

#[async_trait]
impl CustomerRepository for SqliteRepository {
    async fn fetch_customers(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>(schema::SELECT_CUSTOMERS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "Customer"))?;

        rows.into_iter().map(row_to_customer).collect()
    }

    async fn create_customer(&self, customer: &Customer) -> Result<()> {
        let id = customer.id.to_string();

        sqlx::query(schema::INSERT_CUSTOMER)
            .bind(&id)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.image_url)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Customer", &id))?;

        Ok(())
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query_as::<_, UserRow>(schema::SELECT_USER_BY_ID)
            .bind(&id_str)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "User", &id_str))?;

        row.map(row_to_user).transpose()
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(schema::SELECT_USER_BY_EMAIL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "User", email))?;

        row.map(row_to_user).transpose()
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        sqlx::query(schema::INSERT_USER)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "User", &user.email))?;

        Ok(())
    }
}
