use serde::{Deserialize, Serialize};

/// Rows per page on the invoices table.
pub const ITEMS_PER_PAGE: u32 = 6;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page(u32);

impl Page {
    /// Clamps `page` to at least 1.
    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    /// Rows to skip before this page. Widened so any `u32` page fits.
    pub fn offset(&self) -> i64 {
        i64::from(self.0 - 1) * i64::from(ITEMS_PER_PAGE)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

impl From<Option<u32>> for Page {
    fn from(page: Option<u32>) -> Self {
        page.map(Page::new).unwrap_or_default()
    }
}

/// Number of pages needed for `count` rows.
pub fn total_pages(count: u64) -> u32 {
    u32::try_from(count.div_ceil(u64::from(ITEMS_PER_PAGE))).unwrap_or(u32::MAX)
}

/// Builds the `LIKE` pattern for an invoice search.
///
/// The query is lowercased and `%`, `_` and `\` are escaped, so the
/// statement must use `ESCAPE '\'`.
pub fn search_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.trim().to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Summary figures for the dashboard cards. Totals are in cents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    pub number_of_customers: u64,
    pub number_of_invoices: u64,
    pub total_paid_invoices: i64,
    pub total_pending_invoices: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_clamps_to_one() {
        assert_eq!(Page::new(0).number(), 1);
        assert_eq!(Page::new(0).offset(), 0);
        assert_eq!(Page::from(None), Page::new(1));
    }

    #[test]
    fn page_offset_uses_items_per_page() {
        assert_eq!(Page::new(1).offset(), 0);
        assert_eq!(Page::new(2).offset(), 6);
        assert_eq!(Page::new(5).offset(), 24);
    }

    #[test]
    fn largest_page_offset_does_not_overflow() {
        assert_eq!(
            Page::from(Some(u32::MAX)).offset(),
            i64::from(u32::MAX - 1) * 6
        );
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(13), 3);
    }

    #[test]
    fn search_pattern_wraps_and_lowercases() {
        assert_eq!(search_pattern("Lee"), "%lee%");
        assert_eq!(search_pattern(""), "%%");
    }

    #[test]
    fn search_pattern_escapes_wildcards() {
        assert_eq!(search_pattern("50%"), "%50\\%%");
        assert_eq!(search_pattern("a_b"), "%a\\_b%");
    }
}
