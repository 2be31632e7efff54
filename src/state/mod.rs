//! Outcome handling for the listing-page controls.
//!
//! DESIGN
//! ======
//! Each control turns a request outcome into a list of [`Patch`]es: plain
//! descriptions of the DOM mutations to perform. The browser layer applies
//! them in order. Keeping the decisions here means every success and failure
//! path is testable without a DOM.
//!
//! Transport and decode failures produce no patches; the caller logs them.

pub mod bid;
pub mod comments;
pub mod flash;
pub mod watchlist;

use comments::CommentEntry;
use flash::Flash;
use watchlist::WatchlistView;

/// Text inputs a patch can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Bid,
    Comment,
}

/// One DOM mutation planned from a request outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch {
    /// Store the new watch state on the button and restyle it.
    Watchlist(WatchlistView),
    ClearInput(Input),
    /// Replace the current-price text.
    SetPrice(String),
    /// Insert a comment at the top of the comment list.
    PrependComment(CommentEntry),
    /// Append a message to the flash container.
    Flash(Flash),
    /// Show a message directly after the comment input.
    InlineError(Flash),
}
