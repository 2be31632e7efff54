//! # auctions-client
//!
//! WASM behavior layer for the auction site's listing pages. Pages are
//! rendered by the server; this crate attaches to them and makes three
//! controls asynchronous: the watchlist toggle, the bid form and the comment
//! form. Each sends one same-origin JSON request carrying the page's CSRF
//! token and patches the DOM from the server's reply.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Selectors, timings and request settings, overridable per page |
//! | [`net`] | Wire payloads and the typed HTTP client |
//! | [`state`] | Per-control outcome handling, planned as DOM patches |
//! | [`util`] | Cookie lookup, markup building, price text |
//! | `dom` | web-sys bindings and patch application (`browser` feature) |
//! | `page` | The `AuctionPage` controller (`browser` feature) |
//!
//! Everything outside `dom` and `page` builds and tests natively.

pub mod config;
#[cfg(feature = "browser")]
pub mod dom;
pub mod net;
#[cfg(feature = "browser")]
pub mod page;
pub mod state;
pub mod util;

/// Module entry point: install the panic hook and logger, then attach the
/// controller to the loaded page.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            init_logging(config::DEFAULT_LOG_LEVEL);
            log::error!("auction page not started: {err}");
            return;
        }
    };

    let (config, config_error) = match page::read_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (config::PageConfig::default(), Some(err)),
    };
    init_logging(&config.log_level);
    if let Some(err) = config_error {
        log::warn!("using default page config: {err}");
    }

    match page::AuctionPage::from_document(document, config) {
        Ok(page) => {
            if let Err(err) = std::rc::Rc::new(page).attach() {
                log::error!("auction page listeners failed: {err}");
            }
        }
        Err(err) => log::error!("auction page not started: {err}"),
    }
}

#[cfg(feature = "browser")]
fn init_logging(level: &str) {
    let level = level.parse::<log::Level>().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}
