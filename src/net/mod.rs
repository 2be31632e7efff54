//! Networking for the listing-page controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON payloads and `api` performs the requests and
//! classifies replies into success or a typed `ApiError`.

pub mod api;
pub mod types;
