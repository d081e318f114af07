pub mod customers;
pub mod error;
pub mod flash;
pub mod health;
pub mod invoices;
pub mod login;
pub mod overview;
mod page_cache;
pub mod root;

pub use error::AppError;
