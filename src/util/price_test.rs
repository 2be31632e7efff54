use super::*;

fn num(value: serde_json::Value) -> Number {
    match value {
        serde_json::Value::Number(n) => n,
        other => panic!("not a number: {other}"),
    }
}

// =============================================================
// display_price
// =============================================================

#[test]
fn plain_price_uses_server_amount() {
    assert_eq!(display_price("$ ", &num(serde_json::json!(150)), PriceFormat::Plain), "$ 150");
}

#[test]
fn plain_price_keeps_fractional_amount() {
    assert_eq!(display_price("$ ", &num(serde_json::json!(10.5)), PriceFormat::Plain), "$ 10.5");
}

#[test]
fn cents_price_formats_integer_amount() {
    assert_eq!(display_price("$ ", &num(serde_json::json!(758_954)), PriceFormat::Cents), "$ 7,589.54");
}

#[test]
fn cents_price_falls_back_for_fractional_amount() {
    assert_eq!(display_price("R$ ", &num(serde_json::json!(1.25)), PriceFormat::Cents), "R$ 1.25");
}

// =============================================================
// format_cents
// =============================================================

#[test]
fn format_cents_small_amounts() {
    assert_eq!(format_cents(0), "0.00");
    assert_eq!(format_cents(9), "0.09");
    assert_eq!(format_cents(89), "0.89");
}

#[test]
fn format_cents_no_separator_below_thousand() {
    assert_eq!(format_cents(99_999), "999.99");
}

#[test]
fn format_cents_groups_thousands() {
    assert_eq!(format_cents(100_000), "1,000.00");
    assert_eq!(format_cents(123_456_789_000), "1,234,567,890.00");
}
