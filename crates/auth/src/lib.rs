//! Credential authentication for the invoice dashboard.
//!
//! This crate provides:
//! - Email/password sign-in against bcrypt hashes
//! - Session storage (SQLite via the `sqlite` feature, or in-memory)
//! - Axum extractors and the route authorization middleware

mod config;
mod error;
mod extractors;
mod handlers;
mod middleware;
mod password;
mod sessions;
mod signin;
mod state;

#[cfg(test)]
mod test_support;

pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::{CurrentUser, OptionalUser};
pub use handlers::auth_routes;
pub use middleware::require_authorization;
pub use password::{hash_password, verify_password, HASH_COST};
pub use sessions::MemorySessionStore;
#[cfg(feature = "sqlite")]
pub use sessions::SqliteSessionStore;
pub use signin::{authenticate, start_session};
pub use state::AuthState;
