//! One-shot messages carried across a redirect in a cookie.
//!
//! The invoice table reads `flash_message` once and clears it, which is how
//! the outcome of a delete reaches the page it redirects to.

use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};

const COOKIE_NAME: &str = "flash_message";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashMessage {
    #[serde(rename = "type")]
    pub kind: FlashKind,
    pub message: String,
    /// Errors stay until dismissed.
    pub auto_dismiss: bool,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
            auto_dismiss: true,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
            auto_dismiss: false,
        }
    }

    /// Set-Cookie value: readable by scripts, sent on navigation, gone after a minute.
    pub fn to_set_cookie_header(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_default();
        format!(
            "{COOKIE_NAME}={}; Path=/; SameSite=Lax; Max-Age=60",
            urlencoding::encode(&json)
        )
    }
}

/// Redirects to `url` with `flash` attached.
pub fn redirect_with_flash(url: &str, flash: FlashMessage) -> Response {
    (
        [(SET_COOKIE, flash.to_set_cookie_header())],
        Redirect::to(url),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_success_auto_dismisses() {
        let flash = FlashMessage::success("Deleted Invoice.");
        assert_eq!(flash.kind, FlashKind::Success);
        assert!(flash.auto_dismiss);
        assert!(!FlashMessage::error("nope").auto_dismiss);
    }

    #[test]
    fn test_cookie_carries_encoded_json() {
        let header = FlashMessage::error("Database Error: Failed to Delete Invoice.")
            .to_set_cookie_header();

        let (value, attributes) = header.split_once(';').unwrap();
        let json = urlencoding::decode(value.trim_start_matches("flash_message=")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["type"], "error");
        assert_eq!(parsed["message"], "Database Error: Failed to Delete Invoice.");
        assert_eq!(parsed["autoDismiss"], false);
        assert!(attributes.contains("Path=/"));
        assert!(attributes.contains("SameSite=Lax"));
        assert!(attributes.contains("Max-Age=60"));
        assert!(!attributes.contains("HttpOnly"));
    }

    #[test]
    fn test_redirect_with_flash() {
        let response = redirect_with_flash("/dashboard/invoices", FlashMessage::success("ok"));

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/dashboard/invoices");
        assert!(response.headers()[SET_COOKIE]
            .to_str()
            .unwrap()
            .starts_with("flash_message="));
    }
}
