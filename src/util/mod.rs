//! Utility helpers shared across the page controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure string helpers (cookie lookup, markup, price text) kept apart from
//! the DOM layer so they are testable without a browser.

pub mod cookie;
pub mod markup;
pub mod price;
