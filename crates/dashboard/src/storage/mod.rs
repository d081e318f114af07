//! Storage backends for the dashboard repositories.

pub mod sqlite;

pub use sqlite::SqliteRepository;
