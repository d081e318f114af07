use super::{Credentials, CredentialsForm};

/// Shortest password the login form accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validates a post-login redirect target to prevent open redirects.
///
/// Returns `Some(url)` if the URL is a valid relative path, `None` otherwise.
///
/// # Security
///
/// This function prevents open redirect attacks by ensuring URLs:
/// - Start with a single `/` (relative path)
/// - Do not start with `//` (protocol-relative URLs like `//evil.com`)
/// - Do not contain control characters
/// - Do not contain `://`
///
/// # Examples
///
/// ```
/// use dashboard_core::auth::validate_return_to;
///
/// assert_eq!(validate_return_to("/dashboard/invoices"), Some("/dashboard/invoices"));
/// assert_eq!(validate_return_to("//evil.com"), None);
/// assert_eq!(validate_return_to("https://evil.com"), None);
/// ```
pub fn validate_return_to(url: &str) -> Option<&str> {
    if !url.starts_with('/') || url.starts_with("//") {
        return None;
    }

    if url.chars().any(|c| c.is_control()) {
        return None;
    }

    if url.contains("://") {
        return None;
    }

    Some(url)
}

/// Loose email shape check: one `@`, a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Checks the shape of a login submission before any lookup happens.
///
/// Returns `None` when the email is malformed or the password is shorter
/// than [`MIN_PASSWORD_LEN`]; the caller treats that the same as a wrong
/// password.
pub fn validate_credentials(form: &CredentialsForm) -> Option<Credentials> {
    let email = form.email.as_deref()?.trim();
    let password = form.password.as_deref()?;

    if !is_valid_email(email) || password.chars().count() < MIN_PASSWORD_LEN {
        return None;
    }

    Some(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}
