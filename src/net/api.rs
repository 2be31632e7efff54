//! HTTP calls for the three listing-page controls.
//!
//! Client-side (browser): real same-origin `POST`s via `gloo-net`.
//! Native builds: stubs returning a transport error, since these endpoints are
//! only reachable from a page.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<Reply, ApiError>`. `ApiError::Rejected` is
//! the server saying no (non-2xx with a message for the user); `Transport`
//! and `Decode` are failures the user never sees and callers only log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    BidReply, BidRequest, CommentReply, CommentRequest, ErrorReply, WatchlistReply, WatchlistRequest,
};

#[cfg(not(feature = "browser"))]
const NOT_IN_BROWSER: &str = "not available outside the browser";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx reply; `message` is shown to the user.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The user-facing message, for application-level rejections only.
    #[must_use]
    pub fn rejection(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Classify a finished response by status and decode its body.
///
/// 2xx bodies decode into `T`; anything else becomes `Rejected` carrying the
/// body's `error` string, or a generic status message when the body has none.
///
/// # Errors
///
/// Returns `Rejected` for non-2xx statuses and `Decode` for a 2xx body that
/// does not match `T`.
pub fn decode_reply<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if is_success(status) {
        return serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()));
    }
    let message = match serde_json::from_str::<ErrorReply>(body) {
        Ok(reply) if !reply.error.is_empty() => reply.error,
        _ => request_failed_message(status),
    };
    Err(ApiError::Rejected { status, message })
}

/// Client for the listing-page endpoints, carrying the page's CSRF token.
#[derive(Clone, Debug)]
pub struct Api {
    csrf_header: String,
    csrf_token: Option<String>,
}

impl Api {
    #[must_use]
    pub fn new(csrf_header: impl Into<String>, csrf_token: Option<String>) -> Self {
        Self { csrf_header: csrf_header.into(), csrf_token }
    }

    #[must_use]
    pub fn csrf_header(&self) -> &str {
        &self.csrf_header
    }

    #[must_use]
    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    /// Send the watchlist button's stored state.
    ///
    /// # Errors
    ///
    /// See [`decode_reply`]; transport failures are `ApiError::Transport`.
    pub async fn toggle_watchlist(&self, url: &str, request: &WatchlistRequest) -> Result<WatchlistReply, ApiError> {
        self.post(url, request).await
    }

    /// Submit a bid.
    ///
    /// # Errors
    ///
    /// See [`decode_reply`]; transport failures are `ApiError::Transport`.
    pub async fn place_bid(&self, url: &str, request: &BidRequest) -> Result<BidReply, ApiError> {
        self.post(url, request).await
    }

    /// Post a comment.
    ///
    /// # Errors
    ///
    /// See [`decode_reply`]; transport failures are `ApiError::Transport`.
    pub async fn post_comment(&self, url: &str, request: &CommentRequest) -> Result<CommentReply, ApiError> {
        self.post(url, request).await
    }

    #[cfg_attr(not(feature = "browser"), allow(unused_variables, clippy::unused_self))]
    async fn post<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        #[cfg(feature = "browser")]
        {
            let mut builder = gloo_net::http::Request::post(url).mode(web_sys::RequestMode::SameOrigin);
            if let Some(token) = self.csrf_token() {
                builder = builder.header(self.csrf_header(), token);
            }
            let resp = builder
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_reply(status, &text)
        }
        #[cfg(not(feature = "browser"))]
        {
            Err(ApiError::Transport(NOT_IN_BROWSER.to_owned()))
        }
    }
}
