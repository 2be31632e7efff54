//! Bid form.
//!
//! The price shown after a bid is always the amount the server echoes back;
//! the client never derives it from the input.

#[cfg(test)]
#[path = "bid_test.rs"]
mod bid_test;

use super::flash::Flash;
use super::{Input, Patch};
use crate::config::PageConfig;
use crate::net::api::ApiError;
use crate::net::types::{BidReply, BidRequest};
use crate::util::price::display_price;

/// Request body for the input text, or `None` when there is nothing to send.
#[must_use]
pub fn bid_request(input: &str) -> Option<BidRequest> {
    if input.trim().is_empty() {
        return None;
    }
    Some(BidRequest { bid: input.to_owned() })
}

/// Plan the DOM changes for a bid reply.
#[must_use]
pub fn bid_patches(result: Result<BidReply, ApiError>, config: &PageConfig) -> Vec<Patch> {
    match result {
        Ok(reply) => vec![
            Patch::ClearInput(Input::Bid),
            Patch::Flash(Flash::success(reply.message, config.flash_lifetime_ms)),
            Patch::SetPrice(display_price(&config.price_prefix, &reply.bid, config.price_format)),
        ],
        Err(ApiError::Rejected { message, .. }) => vec![
            Patch::ClearInput(Input::Bid),
            Patch::Flash(Flash::danger(message, config.flash_lifetime_ms)),
        ],
        Err(ApiError::Transport(_) | ApiError::Decode(_)) => Vec::new(),
    }
}
