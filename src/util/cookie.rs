//! Cookie-string lookup for the CSRF token.
//!
//! `document.cookie` is a `; `-separated list of `name=value` pairs with
//! percent-encoded values. Names are compared raw, before any decoding, so
//! neither `csrftoken_old` nor `csrf%74oken` satisfies a request for
//! `csrftoken`.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use cookie::Cookie;
use percent_encoding::percent_decode_str;

/// Find `name` in a raw cookie header string and return its decoded value.
///
/// The first exact match on the undecoded name wins. Returns `None` when the
/// name is absent, its value is empty, or the value is not valid UTF-8 once
/// decoded. Pairs that fail to parse are skipped.
#[must_use]
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    let cookie = Cookie::split_parse(cookies).flatten().find(|cookie| cookie.name() == name)?;
    match percent_decode_str(cookie.value()).decode_utf8() {
        Ok(value) if !value.is_empty() => Some(value.into_owned()),
        Ok(_) | Err(_) => None,
    }
}

/// Read a cookie from the current document.
#[cfg(feature = "browser")]
#[must_use]
pub fn document_cookie(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let Ok(html) = document.dyn_into::<web_sys::HtmlDocument>() else {
        return None;
    };
    match html.cookie() {
        Ok(raw) => find_cookie(&raw, name),
        Err(err) => {
            log::warn!("cookie read failed: {err:?}");
            None
        }
    }
}
