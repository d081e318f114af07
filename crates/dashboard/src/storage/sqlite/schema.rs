//! SQLite schema definitions and SQL query constants.
//!
//! Dates are stored as `%Y-%m-%d` text and amounts as integer cents. Search
//! patterns come from `dashboard_core::storage::search_pattern`, which
//! escapes LIKE wildcards with a backslash.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS customers (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    image_url TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS invoices (
    id TEXT PRIMARY KEY,
    customer_id TEXT NOT NULL,
    amount INTEGER NOT NULL,
    status TEXT NOT NULL CHECK (status IN ('pending', 'paid')),
    date TEXT NOT NULL,
    FOREIGN KEY (customer_id) REFERENCES customers(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_invoices_customer_id ON invoices(customer_id);
CREATE INDEX IF NOT EXISTS idx_invoices_date ON invoices(date);
"#;

// ============================================================================
// Invoice queries
// ============================================================================

pub const INSERT_INVOICE: &str = r#"
INSERT INTO invoices (id, customer_id, amount, status, date)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const UPDATE_INVOICE: &str = r#"
UPDATE invoices SET customer_id = ?2, amount = ?3, status = ?4
WHERE id = ?1
"#;

pub const DELETE_INVOICE: &str = "DELETE FROM invoices WHERE id = ?1";

pub const SELECT_INVOICE_BY_ID: &str = r#"
SELECT id, customer_id, amount, status, date
FROM invoices
WHERE id = ?1
"#;

/// Parameters: pattern, limit, offset.
pub const SELECT_FILTERED_INVOICES: &str = r#"
SELECT i.id, i.customer_id, i.amount, i.status, i.date, c.name, c.email, c.image_url
FROM invoices i
JOIN customers c ON i.customer_id = c.id
WHERE lower(c.name) LIKE ?1 ESCAPE '\'
   OR lower(c.email) LIKE ?1 ESCAPE '\'
   OR CAST(i.amount AS TEXT) LIKE ?1 ESCAPE '\'
   OR i.date LIKE ?1 ESCAPE '\'
   OR i.status LIKE ?1 ESCAPE '\'
ORDER BY i.date DESC, i.id
LIMIT ?2 OFFSET ?3
"#;

/// Parameters: pattern.
pub const COUNT_FILTERED_INVOICES: &str = r#"
SELECT COUNT(*)
FROM invoices i
JOIN customers c ON i.customer_id = c.id
WHERE lower(c.name) LIKE ?1 ESCAPE '\'
   OR lower(c.email) LIKE ?1 ESCAPE '\'
   OR CAST(i.amount AS TEXT) LIKE ?1 ESCAPE '\'
   OR i.date LIKE ?1 ESCAPE '\'
   OR i.status LIKE ?1 ESCAPE '\'
"#;

pub const SELECT_LATEST_INVOICES: &str = r#"
SELECT i.id, i.customer_id, i.amount, i.status, i.date, c.name, c.email, c.image_url
FROM invoices i
JOIN customers c ON i.customer_id = c.id
ORDER BY i.date DESC, i.id
LIMIT ?1
"#;

pub const COUNT_INVOICES: &str = "SELECT COUNT(*) FROM invoices";

pub const SUM_INVOICES_BY_STATUS: &str = r#"
SELECT
    COALESCE(SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END), 0),
    COALESCE(SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END), 0)
FROM invoices
"#;

// ============================================================================
// Customer queries
// ============================================================================

pub const INSERT_CUSTOMER: &str = r#"
INSERT INTO customers (id, name, email, image_url)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_CUSTOMERS: &str = r#"
SELECT id, name, email, image_url
FROM customers
ORDER BY name ASC
"#;

pub const COUNT_CUSTOMERS: &str = "SELECT COUNT(*) FROM customers";

// ============================================================================
// User queries
// ============================================================================

pub const INSERT_USER: &str = r#"
INSERT INTO users (id, name, email, password_hash)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, name, email, password_hash
FROM users
WHERE id = ?1
"#;

pub const SELECT_USER_BY_EMAIL: &str = r#"
SELECT id, name, email, password_hash
FROM users
WHERE email = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_names_every_table() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS customers"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS invoices"));
    }

    #[test]
    fn test_search_queries_escape_wildcards() {
        for query in [SELECT_FILTERED_INVOICES, COUNT_FILTERED_INVOICES] {
            assert_eq!(query.matches("ESCAPE '\\'").count(), 5);
        }
    }

    #[test]
    fn test_listing_queries_are_ordered() {
        assert!(SELECT_FILTERED_INVOICES.contains("ORDER BY i.date DESC"));
        assert!(SELECT_LATEST_INVOICES.contains("ORDER BY i.date DESC"));
        assert!(SELECT_CUSTOMERS.contains("ORDER BY name ASC"));
    }
}
