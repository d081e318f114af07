//! Functional core for the Acme invoice dashboard.
//!
//! Pure types and functions only: form validation, the route authorization
//! predicate, repository and cache abstractions. All I/O lives in the
//! `dashboard_auth` and `dashboard` crates.

pub mod auth;
pub mod cache;
pub mod invoice;
pub mod serde;
pub mod storage;
