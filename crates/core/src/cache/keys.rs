const PAGE_PREFIX: &str = "page:";

/// Returns the cache key for a rendered page.
///
/// ```
/// use dashboard_core::cache::page_key;
///
/// assert_eq!(page_key("/dashboard/invoices", None), "page:/dashboard/invoices");
/// assert_eq!(
///     page_key("/dashboard/invoices", Some("page=2")),
///     "page:/dashboard/invoices?page=2"
/// );
/// ```
pub fn page_key(path: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{PAGE_PREFIX}{path}?{query}"),
        None => format!("{PAGE_PREFIX}{path}"),
    }
}

/// Extracts the request path from a page key, dropping any query string.
pub fn page_key_path(key: &str) -> Option<&str> {
    let rest = key.strip_prefix(PAGE_PREFIX)?;
    Some(rest.split_once('?').map_or(rest, |(path, _)| path))
}

/// Whether `key` caches `path` or a page below it.
///
/// Revalidating `/dashboard/invoices` drops the list for every query as
/// well as `/dashboard/invoices/{id}/edit`, but not `/dashboard/invoicesx`.
pub fn key_in_path(key: &str, path: &str) -> bool {
    let Some(key_path) = page_key_path(key) else {
        return false;
    };
    let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);

    if path == "/" {
        return true;
    }

    match key_path.strip_prefix(path) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}
