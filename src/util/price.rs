//! Current-price text shown on the listing page.

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

use serde_json::Number;

use crate::config::PriceFormat;

/// Render a server-confirmed bid amount for display.
///
/// `Cents` only applies to non-negative integers; other amounts fall back to
/// the plain rendering.
#[must_use]
pub fn display_price(prefix: &str, amount: &Number, format: PriceFormat) -> String {
    match (format, amount.as_u64()) {
        (PriceFormat::Cents, Some(cents)) => format!("{prefix}{}", format_cents(cents)),
        _ => format!("{prefix}{amount}"),
    }
}

/// Format integer cents as `units.cc` with a comma every three unit digits.
///
/// `89` → `0.89`, `758954` → `7,589.54`.
#[must_use]
pub fn format_cents(cents: u64) -> String {
    let units = (cents / 100).to_string();
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped}.{:02}", cents % 100)
}
