//! Wire payloads for the listing-page endpoints.
//!
//! DESIGN
//! ======
//! One canonical shape per endpoint: the watchlist request carries the stored
//! state under `watchlist` and the reply answers under `state`. Every non-2xx
//! reply is expected to carry `{"error": ...}`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Reply `state` value meaning the listing is now on the watchlist.
pub const WATCHLIST_ADDED: &str = "add";

/// Body of `POST <watchlist url>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WatchlistRequest {
    /// Stored state of the button before the click; empty when not watching.
    pub watchlist: String,
}

/// Successful reply from the watchlist endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WatchlistReply {
    pub state: String,
}

impl WatchlistReply {
    /// Whether the server added the listing (any other state means removed).
    #[must_use]
    pub fn is_added(&self) -> bool {
        self.state == WATCHLIST_ADDED
    }
}

/// Body of `POST <bid url>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BidRequest {
    /// Raw input text; the server owns parsing and validation.
    pub bid: String,
}

/// Successful reply from the bid endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BidReply {
    pub message: String,
    /// Accepted bid amount; this is the new current price.
    pub bid: serde_json::Number,
}

/// Body of `POST <comment url>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommentRequest {
    pub comment: String,
}

/// Successful reply from the comment endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CommentReply {
    pub user: String,
    pub date: String,
    pub text: String,
}

/// Body of every non-2xx reply.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}
