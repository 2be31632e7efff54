//! Listing-page controller.
//!
//! DESIGN
//! ======
//! `AuctionPage` is built once when the module starts and lives until the
//! user navigates away. It owns the resolved elements, the configuration and
//! the CSRF-carrying [`Api`]; nothing is kept in globals. Each control is
//! optional: a listing owner sees no bid form, an anonymous visitor no
//! watchlist button, and the remaining controls still attach.
//!
//! Clicks spawn one request future each with no in-flight guard. The DOM is
//! only touched after the reply arrives, by applying the patches planned in
//! `state`.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlInputElement};

use crate::config::{CONFIG_ELEMENT_ID, ConfigError, PageConfig};
use crate::dom::{self, BrowserDelay, DomError, FlashContainer, InlineError};
use crate::net::api::{Api, ApiError};
use crate::state::bid::{bid_patches, bid_request};
use crate::state::comments::{comment_patches, comment_request};
use crate::state::flash::show;
use crate::state::watchlist::{watchlist_patches, watchlist_request};
use crate::state::{Input, Patch};
use crate::util::cookie::document_cookie;
use crate::util::markup::comment_item;

/// Attribute holding a control's endpoint.
const URL_ATTRIBUTE: &str = "data-url";

struct WatchlistControl {
    button: HtmlButtonElement,
    url: String,
}

struct BidForm {
    input: HtmlInputElement,
    button: Element,
    price: Element,
    url: String,
}

struct CommentForm {
    input: HtmlInputElement,
    button: Element,
    list: Element,
    url: String,
}

/// Read the page's inline JSON config, or the defaults when there is none.
///
/// # Errors
///
/// Returns an error when the config element holds invalid JSON.
pub fn read_config(document: &Document) -> Result<PageConfig, ConfigError> {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    PageConfig::from_json(&text)
}

fn control_url(button: &Element) -> Result<String, DomError> {
    button
        .get_attribute(URL_ATTRIBUTE)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| DomError::Missing(format!("{URL_ATTRIBUTE} on {}", button.tag_name())))
}

/// Resolve an optional control, logging why it is unavailable.
fn optional<T>(name: &str, resolved: Result<T, DomError>) -> Option<T> {
    match resolved {
        Ok(control) => Some(control),
        Err(err) => {
            log::info!("{name} control disabled: {err}");
            None
        }
    }
}

fn on_click<F>(target: &Element, handler: F) -> Result<(), DomError>
where
    F: Fn() + 'static,
{
    let callback = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

pub struct AuctionPage {
    config: PageConfig,
    api: Api,
    document: Document,
    flashes: FlashContainer,
    watchlist: Option<WatchlistControl>,
    bid: Option<BidForm>,
    comments: Option<CommentForm>,
}

impl AuctionPage {
    /// Resolve the page's elements.
    ///
    /// # Errors
    ///
    /// Fails only when the flash container is missing; absent controls are
    /// disabled individually.
    pub fn new(document: Document, config: PageConfig, csrf_token: Option<String>) -> Result<Self, DomError> {
        let flashes = FlashContainer::new(document.clone(), dom::query(&document, &config.flash_selector)?);
        let watchlist = optional("watchlist", Self::resolve_watchlist(&document, &config));
        let bid = optional("bid", Self::resolve_bid(&document, &config));
        let comments = optional("comment", Self::resolve_comments(&document, &config));
        if csrf_token.is_none() {
            log::warn!("no {} cookie; requests will be sent without a CSRF token", config.csrf_cookie);
        }
        let api = Api::new(config.csrf_header.clone(), csrf_token);
        Ok(Self { config, api, document, flashes, watchlist, bid, comments })
    }

    /// Build from the current document, reading the CSRF token from its cookie.
    ///
    /// # Errors
    ///
    /// See [`AuctionPage::new`].
    pub fn from_document(document: Document, config: PageConfig) -> Result<Self, DomError> {
        let csrf_token = document_cookie(&config.csrf_cookie);
        Self::new(document, config, csrf_token)
    }

    fn resolve_watchlist(document: &Document, config: &PageConfig) -> Result<WatchlistControl, DomError> {
        let button = dom::query_as::<HtmlButtonElement>(document, &config.watchlist_selector)?;
        let url = control_url(&button)?;
        Ok(WatchlistControl { button, url })
    }

    fn resolve_bid(document: &Document, config: &PageConfig) -> Result<BidForm, DomError> {
        let input = dom::query_as::<HtmlInputElement>(document, &config.bid_input_selector)?;
        let button = dom::query(document, &config.bid_button_selector)?;
        let price = dom::query(document, &config.price_selector)?;
        let url = control_url(&button)?;
        Ok(BidForm { input, button, price, url })
    }

    fn resolve_comments(document: &Document, config: &PageConfig) -> Result<CommentForm, DomError> {
        let input = dom::query_as::<HtmlInputElement>(document, &config.comment_input_selector)?;
        let button = dom::query(document, &config.comment_button_selector)?;
        let list = dom::query(document, &config.comment_list_selector)?;
        let url = control_url(&button)?;
        Ok(CommentForm { input, button, list, url })
    }

    /// Wire click listeners for every available control.
    ///
    /// Listeners hold the page for the rest of the document's life.
    ///
    /// # Errors
    ///
    /// Returns an error if a listener cannot be registered.
    pub fn attach(self: Rc<Self>) -> Result<(), DomError> {
        if let Some(control) = &self.watchlist {
            let page = Rc::clone(&self);
            on_click(&control.button, move || {
                let page = Rc::clone(&page);
                wasm_bindgen_futures::spawn_local(async move { page.toggle_watchlist().await });
            })?;
        }
        if let Some(form) = &self.bid {
            let page = Rc::clone(&self);
            on_click(&form.button, move || {
                let page = Rc::clone(&page);
                wasm_bindgen_futures::spawn_local(async move { page.submit_bid().await });
            })?;
        }
        if let Some(form) = &self.comments {
            let page = Rc::clone(&self);
            on_click(&form.button, move || {
                let page = Rc::clone(&page);
                wasm_bindgen_futures::spawn_local(async move { page.submit_comment().await });
            })?;
        }
        log::info!(
            "auction page attached: watchlist={} bid={} comments={}",
            self.watchlist.is_some(),
            self.bid.is_some(),
            self.comments.is_some()
        );
        Ok(())
    }

    // --- Handlers ---

    /// Send the button's stored state and flip it on success.
    pub async fn toggle_watchlist(&self) {
        let Some(control) = &self.watchlist else {
            return;
        };
        let request = watchlist_request(&control.button.value());
        let result = self.api.toggle_watchlist(&control.url, &request).await;
        self.finish("watchlist", result, watchlist_patches);
    }

    /// Send the bid input and show the server-confirmed price.
    pub async fn submit_bid(&self) {
        let Some(form) = &self.bid else {
            return;
        };
        let Some(request) = bid_request(&form.input.value()) else {
            return;
        };
        let result = self.api.place_bid(&form.url, &request).await;
        self.finish("bid", result, bid_patches);
    }

    /// Send the comment input and prepend the stored comment.
    pub async fn submit_comment(&self) {
        let Some(form) = &self.comments else {
            return;
        };
        let Some(request) = comment_request(&form.input.value()) else {
            return;
        };
        let result = self.api.post_comment(&form.url, &request).await;
        self.finish("comment", result, comment_patches);
    }

    // --- Outcome ---

    fn finish<T>(&self, action: &str, result: Result<T, ApiError>, plan: fn(Result<T, ApiError>, &PageConfig) -> Vec<Patch>) {
        match &result {
            Ok(_) => log::debug!("{action} accepted"),
            Err(ApiError::Rejected { status, message }) => log::info!("{action} rejected ({status}): {message}"),
            Err(err) => log::error!("{action} failed: {err}"),
        }
        for patch in plan(result, &self.config) {
            if let Err(err) = self.apply(&patch) {
                log::warn!("{action}: patch skipped: {err}");
            }
        }
    }

    fn apply(&self, patch: &Patch) -> Result<(), DomError> {
        match patch {
            Patch::Watchlist(view) => dom::apply_watchlist_view(&self.watchlist()?.button, view),
            Patch::ClearInput(Input::Bid) => {
                dom::clear_input(&self.bid()?.input);
                Ok(())
            }
            Patch::ClearInput(Input::Comment) => {
                dom::clear_input(&self.comments()?.input);
                Ok(())
            }
            Patch::SetPrice(text) => {
                dom::set_text(&self.bid()?.price, text);
                Ok(())
            }
            Patch::PrependComment(entry) => dom::prepend_markup(&self.document, &self.comments()?.list, &comment_item(entry)),
            Patch::Flash(flash) => {
                show(&self.flashes, &BrowserDelay, flash);
                Ok(())
            }
            Patch::InlineError(flash) => {
                let anchor: Element = self.comments()?.input.clone().unchecked_into();
                show(&InlineError::new(self.document.clone(), anchor), &BrowserDelay, flash);
                Ok(())
            }
        }
    }

    fn watchlist(&self) -> Result<&WatchlistControl, DomError> {
        self.watchlist.as_ref().ok_or_else(|| DomError::Missing(self.config.watchlist_selector.clone()))
    }

    fn bid(&self) -> Result<&BidForm, DomError> {
        self.bid.as_ref().ok_or_else(|| DomError::Missing(self.config.bid_input_selector.clone()))
    }

    fn comments(&self) -> Result<&CommentForm, DomError> {
        self.comments.as_ref().ok_or_else(|| DomError::Missing(self.config.comment_input_selector.clone()))
    }
}
