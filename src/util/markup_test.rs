use super::*;

fn entry(user: &str, date: &str, text: &str) -> CommentEntry {
    CommentEntry { user: user.to_owned(), date: date.to_owned(), text: text.to_owned() }
}

#[test]
fn escape_html_passes_plain_text() {
    assert_eq!(escape_html("nice item"), "nice item");
}

#[test]
fn escape_html_escapes_markup_characters() {
    assert_eq!(
        escape_html(r#"<b onclick="x('y')">&</b>"#),
        "&lt;b onclick=&quot;x(&#39;y&#39;)&quot;&gt;&amp;&lt;/b&gt;"
    );
}

#[test]
fn escape_html_keeps_non_ascii() {
    assert_eq!(escape_html("leilão ✓"), "leilão ✓");
}

#[test]
fn comment_item_contains_all_fields() {
    let html = comment_item(&entry("alice", "2024-01-01", "nice item"));
    assert!(html.starts_with("<li"));
    assert!(html.ends_with("</li>"));
    assert!(html.contains(">alice</strong>"));
    assert!(html.contains(">2024-01-01</small>"));
    assert!(html.contains(">nice item</p>"));
}

#[test]
fn comment_item_escapes_user_content() {
    let html = comment_item(&entry("<script>", "today", "a < b"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("a &lt; b"));
}
