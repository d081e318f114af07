/// Root of the signed-in area.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// The sign-in page.
pub const LOGIN_PATH: &str = "/login";

/// Path prefixes the authorization middleware never looks at.
const UNGATED_PREFIXES: [&str; 3] = ["/api", "/auth", "/dist"];

/// Outcome of the route-level authorization check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// Let the request through.
    Allow,
    /// Send the visitor to the login page.
    Deny,
    /// Send the visitor somewhere else.
    Redirect(String),
}

/// Decides what to do with a request to `path`.
///
/// Anything under `/dashboard` requires a session. Signed-in users hitting
/// any other gated page are sent to the dashboard.
pub fn authorize(is_logged_in: bool, path: &str) -> Authorization {
    if path.starts_with(DASHBOARD_PATH) {
        if is_logged_in {
            Authorization::Allow
        } else {
            Authorization::Deny
        }
    } else if is_logged_in {
        Authorization::Redirect(DASHBOARD_PATH.to_string())
    } else {
        Authorization::Allow
    }
}

/// Whether the authorization middleware applies to `path`.
///
/// API, auth, static asset and health routes are skipped, as is any `.png`.
pub fn is_gated_path(path: &str) -> bool {
    if path == "/livez" || path.ends_with(".png") {
        return false;
    }

    !UNGATED_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")))
}

/// Login page URL that returns to `callback` after signing in.
pub fn login_redirect(callback: &str) -> String {
    format!("{LOGIN_PATH}?callbackUrl={}", urlencoding::encode(callback))
}
