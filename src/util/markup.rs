//! Markup builders for nodes inserted into server-rendered pages.
//!
//! Every interpolated value is escaped; the output is parsed into a detached
//! node by the DOM layer before insertion.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use crate::state::comments::CommentEntry;

/// Escape text for use inside element content or a quoted attribute.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// List item for one comment, matching the server-rendered comment list.
#[must_use]
pub fn comment_item(entry: &CommentEntry) -> String {
    format!(
        concat!(
            r#"<li class="list-group-item comment">"#,
            r#"<strong class="comment__user">{}</strong> "#,
            r#"<small class="comment__date text-muted">{}</small>"#,
            r#"<p class="comment__text">{}</p>"#,
            "</li>"
        ),
        escape_html(&entry.user),
        escape_html(&entry.date),
        escape_html(&entry.text),
    )
}
