use super::*;

#[test]
fn default_matches_listing_page_markup() {
    let config = PageConfig::default();
    assert_eq!(config.watchlist_selector, "#watchlist");
    assert_eq!(config.flash_selector, ".flash_message");
    assert_eq!(config.csrf_cookie, "csrftoken");
    assert_eq!(config.csrf_header, "X-CSRFToken");
    assert_eq!(config.flash_lifetime_ms, 3000);
    assert_eq!(config.inline_error_lifetime_ms, 2000);
    assert_eq!(config.price_format, PriceFormat::Plain);
}

#[test]
fn from_json_blank_yields_defaults() {
    assert_eq!(PageConfig::from_json("  \n").unwrap(), PageConfig::default());
}

#[test]
fn from_json_overrides_only_given_keys() {
    let config = PageConfig::from_json(r##"{"bid_input_selector": "#amount", "price_format": "cents"}"##).unwrap();
    assert_eq!(config.bid_input_selector, "#amount");
    assert_eq!(config.price_format, PriceFormat::Cents);
    assert_eq!(config.bid_button_selector, DEFAULT_BID_BUTTON_SELECTOR);
    assert_eq!(config.flash_lifetime_ms, DEFAULT_FLASH_LIFETIME_MS);
}

#[test]
fn from_json_ignores_unknown_keys() {
    let config = PageConfig::from_json(r#"{"theme": "dark"}"#).unwrap();
    assert_eq!(config, PageConfig::default());
}

#[test]
fn from_json_rejects_malformed_text() {
    let err = PageConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn from_json_rejects_unknown_price_format() {
    assert!(PageConfig::from_json(r#"{"price_format": "euros"}"#).is_err());
}

#[test]
fn from_json_rejects_zero_lifetime() {
    let err = PageConfig::from_json(r#"{"flash_lifetime_ms": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroLifetime));
}
