//! Comment form and list.
//!
//! A comment only appears in the list once the server has stored it, built
//! from the reply rather than from the input.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use super::flash::Flash;
use super::{Input, Patch};
use crate::config::PageConfig;
use crate::net::api::ApiError;
use crate::net::types::{CommentReply, CommentRequest};

/// A stored comment as rendered in the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentEntry {
    pub user: String,
    pub date: String,
    pub text: String,
}

impl From<CommentReply> for CommentEntry {
    fn from(reply: CommentReply) -> Self {
        Self { user: reply.user, date: reply.date, text: reply.text }
    }
}

/// Request body for the input text, or `None` for a blank comment.
#[must_use]
pub fn comment_request(input: &str) -> Option<CommentRequest> {
    if input.trim().is_empty() {
        return None;
    }
    Some(CommentRequest { comment: input.to_owned() })
}

/// Plan the DOM changes for a comment reply.
#[must_use]
pub fn comment_patches(result: Result<CommentReply, ApiError>, config: &PageConfig) -> Vec<Patch> {
    match result {
        Ok(reply) => vec![Patch::ClearInput(Input::Comment), Patch::PrependComment(reply.into())],
        Err(ApiError::Rejected { message, .. }) => vec![
            Patch::ClearInput(Input::Comment),
            Patch::InlineError(Flash::danger(message, config.inline_error_lifetime_ms)),
        ],
        Err(ApiError::Transport(_) | ApiError::Decode(_)) => Vec::new(),
    }
}
