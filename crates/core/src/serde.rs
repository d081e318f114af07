//! Serde helpers for query strings and form submissions.
//!
//! Browsers send empty strings for untouched inputs; these helpers turn
//! them into `None` instead of failing the whole extraction.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize a page number leniently.
///
/// Anything that isn't a positive integer becomes None so `?page=abc`
/// falls back to the first page rather than rejecting the request.
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.trim().parse::<u32>().ok()).filter(|n| *n > 0))
}
