use super::*;
use crate::config::PriceFormat;
use crate::net::api::decode_reply;

fn placed(body: &str) -> Result<BidReply, ApiError> {
    decode_reply(200, body)
}

// =============================================================
// bid_request
// =============================================================

#[test]
fn bid_request_sends_input_text() {
    assert_eq!(bid_request("150").map(|r| r.bid), Some("150".to_owned()));
}

#[test]
fn bid_request_keeps_formatting_for_server() {
    assert_eq!(bid_request("$ 1,500.00").map(|r| r.bid), Some("$ 1,500.00".to_owned()));
}

#[test]
fn bid_request_blank_is_none() {
    assert_eq!(bid_request(""), None);
    assert_eq!(bid_request("   "), None);
}

// =============================================================
// bid_patches
// =============================================================

#[test]
fn success_clears_input_flashes_and_sets_price() {
    let patches = bid_patches(placed(r#"{"message": "Bid placed", "bid": 150}"#), &PageConfig::default());
    assert_eq!(
        patches,
        vec![
            Patch::ClearInput(Input::Bid),
            Patch::Flash(Flash::success("Bid placed", 3000)),
            Patch::SetPrice("$ 150".to_owned()),
        ]
    );
}

#[test]
fn success_price_uses_configured_format() {
    let config = PageConfig { price_format: PriceFormat::Cents, ..PageConfig::default() };
    let patches = bid_patches(placed(r#"{"message": "ok", "bid": 758954}"#), &config);
    assert_eq!(patches.last(), Some(&Patch::SetPrice("$ 7,589.54".to_owned())));
}

#[test]
fn rejection_clears_input_and_shows_error() {
    let result = decode_reply::<BidReply>(400, r#"{"error": "Bid too low"}"#);
    let patches = bid_patches(result, &PageConfig::default());
    assert_eq!(
        patches,
        vec![Patch::ClearInput(Input::Bid), Patch::Flash(Flash::danger("Bid too low", 3000))]
    );
}

#[test]
fn rejection_never_sets_price() {
    let result = decode_reply::<BidReply>(400, r#"{"error": "Auction is closed"}"#);
    let patches = bid_patches(result, &PageConfig::default());
    assert!(!patches.iter().any(|p| matches!(p, Patch::SetPrice(_))));
}

#[test]
fn malformed_reply_changes_nothing() {
    let patches = bid_patches(placed(r#"{"message": "Bid placed"}"#), &PageConfig::default());
    assert!(patches.is_empty());
}
