//! Placeholder users, customers and invoices for local development.

use anyhow::Result;
use chrono::NaiveDate;

use dashboard_auth::{hash_password, HASH_COST};
use dashboard_core::auth::User;
use dashboard_core::invoice::{Customer, Invoice, InvoiceStatus};
use dashboard_core::storage::{CustomerRepository, InvoiceRepository, UserRepository};

pub const DEMO_EMAIL: &str = "user@nextmail.com";
pub const DEMO_PASSWORD: &str = "123456";

/// name, email, image
const CUSTOMERS: [(&str, &str, &str); 6] = [
    ("Evil Rabbit", "evil@rabbit.com", "/customers/evil-rabbit.png"),
    ("Delba de Oliveira", "delba@oliveira.com", "/customers/delba-de-oliveira.png"),
    ("Lee Robinson", "lee@robinson.com", "/customers/lee-robinson.png"),
    ("Michael Novotny", "michael@novotny.com", "/customers/michael-novotny.png"),
    ("Amy Burns", "amy@burns.com", "/customers/amy-burns.png"),
    ("Balazs Orban", "balazs@orban.com", "/customers/balazs-orban.png"),
];

/// customer index, cents, status, date
const INVOICES: [(usize, i64, InvoiceStatus, &str); 13] = [
    (0, 15_795, InvoiceStatus::Pending, "2022-12-06"),
    (1, 20_348, InvoiceStatus::Pending, "2022-11-14"),
    (4, 3_040, InvoiceStatus::Paid, "2022-10-29"),
    (3, 44_800, InvoiceStatus::Paid, "2023-09-10"),
    (5, 34_577, InvoiceStatus::Pending, "2023-08-05"),
    (2, 54_246, InvoiceStatus::Pending, "2023-07-16"),
    (0, 666, InvoiceStatus::Pending, "2023-06-27"),
    (3, 32_545, InvoiceStatus::Paid, "2023-06-09"),
    (4, 1_250, InvoiceStatus::Paid, "2023-06-17"),
    (5, 8_546, InvoiceStatus::Paid, "2023-06-07"),
    (1, 500, InvoiceStatus::Paid, "2023-08-19"),
    (5, 8_945, InvoiceStatus::Paid, "2023-06-03"),
    (2, 1_000, InvoiceStatus::Paid, "2022-06-05"),
];

/// What a seeding run inserted.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub customers: usize,
    pub invoices: usize,
}

/// Inserts the demo login and, when no customers exist yet, the placeholder
/// customers and their invoices. Running it again inserts nothing.
pub async fn seed<R>(repo: &R) -> Result<SeedReport>
where
    R: InvoiceRepository + CustomerRepository + UserRepository,
{
    let mut report = SeedReport::default();

    if repo.get_user_by_email(DEMO_EMAIL).await?.is_none() {
        let hash = hash_password(DEMO_PASSWORD.to_string(), HASH_COST).await?;
        repo.create_user(&User::new("User", DEMO_EMAIL, hash)).await?;
        report.users += 1;
    }

    if !repo.fetch_customers().await?.is_empty() {
        return Ok(report);
    }

    let customers: Vec<Customer> = CUSTOMERS
        .iter()
        .map(|(name, email, image)| Customer::new(*name, *email).with_image_url(*image))
        .collect();
    for customer in &customers {
        repo.create_customer(customer).await?;
    }
    report.customers = customers.len();

    for (index, amount, status, date) in INVOICES {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
        repo.create_invoice(&Invoice::new(customers[index].id, amount, status, date))
            .await?;
        report.invoices += 1;
    }

    tracing::info!(
        users = report.users,
        customers = report.customers,
        invoices = report.invoices,
        "Seeded placeholder data"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_auth::verify_password;

    use crate::storage::sqlite::{connect, SqliteRepository};

    async fn repo() -> SqliteRepository {
        let repo = SqliteRepository::new(connect("sqlite::memory:").await.unwrap());
        repo.migrate().await.unwrap();
        repo
    }

    #[test]
    fn test_invoices_reference_known_customers() {
        assert!(INVOICES.iter().all(|(index, ..)| *index < CUSTOMERS.len()));
        assert!(INVOICES.iter().all(|(_, amount, ..)| *amount > 0));
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let repo = repo().await;

        let first = seed(&repo).await.unwrap();
        assert_eq!(
            first,
            SeedReport {
                users: 1,
                customers: CUSTOMERS.len(),
                invoices: INVOICES.len(),
            }
        );

        let second = seed(&repo).await.unwrap();
        assert_eq!(second, SeedReport::default());

        let cards = repo.card_data().await.unwrap();
        assert_eq!(cards.number_of_invoices, INVOICES.len() as u64);
    }

    #[tokio::test]
    async fn test_demo_login_verifies() {
        let repo = repo().await;
        seed(&repo).await.unwrap();

        let user = repo.get_user_by_email(DEMO_EMAIL).await.unwrap().unwrap();
        assert!(verify_password(DEMO_PASSWORD.to_string(), user.password_hash)
            .await
            .unwrap());
    }
}
