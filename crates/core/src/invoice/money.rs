/// Largest invoice amount accepted, in cents ($1,000,000,000.00).
///
/// Keeps status totals far from `i64` overflow when summed in SQL.
pub const MAX_AMOUNT_IN_CENTS: i64 = 100_000_000_000;

/// Converts a dollar amount to whole cents, rounding to the nearest cent.
///
/// Returns `None` for non-finite input or when the magnitude exceeds
/// [`MAX_AMOUNT_IN_CENTS`].
pub fn dollars_to_cents(dollars: f64) -> Option<i64> {
    let cents = (dollars * 100.0).round();
    if !cents.is_finite() || cents.abs() > MAX_AMOUNT_IN_CENTS as f64 {
        return None;
    }
    Some(cents as i64)
}

/// Converts cents back to dollars for prefilling edit forms.
pub fn cents_to_dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Formats cents as US dollars, e.g. `$1,234.56`.
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();
    let remainder = abs % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{remainder:02}")
}
