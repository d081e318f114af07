//! Login page (GET /login).
//!
//! Signed-in visitors never get here: the authorization middleware sends
//! them on to the dashboard.

use askama::Template;
use axum::extract::Query;
use axum::response::IntoResponse;
use serde::Deserialize;

use dashboard_core::auth::{sign_in_error_message, validate_return_to, DASHBOARD_PATH};
use dashboard_core::serde::deserialize_optional_string;

use super::root::HtmlTemplate;

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    #[serde(
        default,
        rename = "callbackUrl",
        deserialize_with = "deserialize_optional_string"
    )]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub redirect_to: String,
    pub error_message: Option<&'static str>,
}

impl LoginTemplate {
    pub fn from_query(query: &LoginQuery) -> Self {
        let redirect_to = query
            .callback_url
            .as_deref()
            .and_then(validate_return_to)
            .unwrap_or(DASHBOARD_PATH)
            .to_string();

        Self {
            redirect_to,
            error_message: sign_in_error_message(query.error.as_deref()),
        }
    }
}

pub async fn login_page(Query(query): Query<LoginQuery>) -> impl IntoResponse {
    HtmlTemplate(LoginTemplate::from_query(&query))
}
