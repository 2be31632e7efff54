//! Watchlist toggle button.
//!
//! The button's `value` attribute stores the current state: `in_watchlist`
//! while the listing is watched, empty otherwise. The server decides the new
//! state; the button only changes after a successful reply.

#[cfg(test)]
#[path = "watchlist_test.rs"]
mod watchlist_test;

use super::Patch;
use super::flash::Flash;
use crate::config::PageConfig;
use crate::net::api::ApiError;
use crate::net::types::{WatchlistReply, WatchlistRequest};

/// Stored `value` while the listing is on the watchlist.
pub const WATCHING_VALUE: &str = "in_watchlist";

pub const ADD_LABEL: &str = "Add to watchlist";
pub const REMOVE_LABEL: &str = "Remove from watchlist";
pub const ADDED_MESSAGE: &str = "Added to watchlist";
pub const DELETED_MESSAGE: &str = "Deleted from watchlist";

const SOLID_CLASS: &str = "btn-primary";
const OUTLINE_CLASS: &str = "btn-outline-primary";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchState {
    Watching,
    NotWatching,
}

impl WatchState {
    /// Interpret the button's stored value; any non-empty value is watching.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value.is_empty() { Self::NotWatching } else { Self::Watching }
    }

    #[must_use]
    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Watching => WATCHING_VALUE,
            Self::NotWatching => "",
        }
    }

    /// Button appearance for this state.
    #[must_use]
    pub fn view(self) -> WatchlistView {
        match self {
            Self::Watching => WatchlistView {
                value: WATCHING_VALUE,
                remove_class: OUTLINE_CLASS,
                add_class: SOLID_CLASS,
                label: REMOVE_LABEL,
            },
            Self::NotWatching => WatchlistView {
                value: "",
                remove_class: SOLID_CLASS,
                add_class: OUTLINE_CLASS,
                label: ADD_LABEL,
            },
        }
    }
}

/// Attribute, class and label changes applied to the watchlist button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatchlistView {
    pub value: &'static str,
    pub remove_class: &'static str,
    pub add_class: &'static str,
    pub label: &'static str,
}

/// Request body carrying the button's stored state in canonical form.
#[must_use]
pub fn watchlist_request(stored: &str) -> WatchlistRequest {
    let state = WatchState::from_stored(stored);
    WatchlistRequest { watchlist: state.stored_value().to_owned() }
}

/// Plan the DOM changes for a watchlist reply.
#[must_use]
pub fn watchlist_patches(result: Result<WatchlistReply, ApiError>, config: &PageConfig) -> Vec<Patch> {
    match result {
        Ok(reply) if reply.is_added() => vec![
            Patch::Watchlist(WatchState::Watching.view()),
            Patch::Flash(Flash::success(ADDED_MESSAGE, config.flash_lifetime_ms)),
        ],
        Ok(_) => vec![
            Patch::Watchlist(WatchState::NotWatching.view()),
            Patch::Flash(Flash::danger(DELETED_MESSAGE, config.flash_lifetime_ms)),
        ],
        Err(ApiError::Rejected { message, .. }) => {
            vec![Patch::Flash(Flash::danger(message, config.flash_lifetime_ms))]
        }
        Err(ApiError::Transport(_) | ApiError::Decode(_)) => Vec::new(),
    }
}
