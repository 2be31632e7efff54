//! web-sys bindings for the listing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches the live DOM lives here: element lookup, markup
//! parsing, flash rendering, timers, and applying [`Patch`]es planned by the
//! `state` modules. Only compiled with the `browser` feature.
//!
//! ERROR HANDLING
//! ==============
//! DOM calls return `DomError`; callers log and skip the failed mutation so
//! one bad node never stops the remaining patches.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, HtmlTemplateElement};

use crate::state::flash::{Delay, Flash, FlashSurface};
use crate::state::watchlist::WatchlistView;

const INLINE_ERROR_CLASS: &str = "comment-error text-danger";
const INLINE_ERROR_STYLE: &str = "color: red";

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("document not available")]
    NoDocument,
    #[error("no element matches {0}")]
    Missing(String),
    #[error("element {0} has the wrong type")]
    WrongType(String),
    #[error("markup produced no element")]
    EmptyMarkup,
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

// =============================================================
// Lookup
// =============================================================

/// The current page's document.
///
/// # Errors
///
/// Returns `NoDocument` outside a window context.
pub fn document() -> Result<Document, DomError> {
    web_sys::window().and_then(|w| w.document()).ok_or(DomError::NoDocument)
}

/// First element matching `selector`.
///
/// # Errors
///
/// Returns `Missing` when nothing matches and `Js` for an invalid selector.
pub fn query(document: &Document, selector: &str) -> Result<Element, DomError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| DomError::Missing(selector.to_owned()))
}

/// First element matching `selector`, cast to a concrete element type.
///
/// # Errors
///
/// As [`query`], plus `WrongType` when the element is not a `T`.
pub fn query_as<T: JsCast>(document: &Document, selector: &str) -> Result<T, DomError> {
    query(document, selector)?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType(selector.to_owned()))
}

/// Parse `markup` into a single detached element.
///
/// # Errors
///
/// Returns `EmptyMarkup` when the markup holds no element.
pub fn html_to_element(document: &Document, markup: &str) -> Result<Element, DomError> {
    let template = document
        .create_element("template")?
        .dyn_into::<HtmlTemplateElement>()
        .map_err(|_| DomError::WrongType("template".to_owned()))?;
    template.set_inner_html(markup.trim());
    template.content().first_element_child().ok_or(DomError::EmptyMarkup)
}

// =============================================================
// Flash surfaces
// =============================================================

fn message_paragraph(document: &Document, text: &str, class_name: &str) -> Result<Element, DomError> {
    let paragraph = document.create_element("p")?;
    paragraph.set_class_name(class_name);
    paragraph.set_text_content(Some(text));
    Ok(paragraph)
}

fn emit_logged(rendered: Result<Element, DomError>) -> Option<Element> {
    match rendered {
        Ok(element) => Some(element),
        Err(err) => {
            log::warn!("flash not shown: {err}");
            None
        }
    }
}

/// The page's flash container; messages are appended at the end.
pub struct FlashContainer {
    document: Document,
    container: Element,
}

impl FlashContainer {
    #[must_use]
    pub fn new(document: Document, container: Element) -> Self {
        Self { document, container }
    }

    fn render(&self, flash: &Flash) -> Result<Element, DomError> {
        let paragraph = message_paragraph(&self.document, &flash.text, flash.kind.class_name())?;
        self.container.append_child(&paragraph)?;
        Ok(paragraph)
    }
}

impl FlashSurface for FlashContainer {
    type Handle = Element;

    fn emit(&self, flash: &Flash) -> Option<Element> {
        emit_logged(self.render(flash))
    }

    fn remove(handle: &Element) {
        handle.remove();
    }
}

/// Red text inserted directly after an anchor element.
pub struct InlineError {
    document: Document,
    anchor: Element,
}

impl InlineError {
    #[must_use]
    pub fn new(document: Document, anchor: Element) -> Self {
        Self { document, anchor }
    }

    fn render(&self, flash: &Flash) -> Result<Element, DomError> {
        let paragraph = message_paragraph(&self.document, &flash.text, INLINE_ERROR_CLASS)?;
        paragraph.set_attribute("style", INLINE_ERROR_STYLE)?;
        self.anchor.after_with_node_1(&paragraph)?;
        Ok(paragraph)
    }
}

impl FlashSurface for InlineError {
    type Handle = Element;

    fn emit(&self, flash: &Flash) -> Option<Element> {
        emit_logged(self.render(flash))
    }

    fn remove(handle: &Element) {
        handle.remove();
    }
}

/// `setTimeout`-backed delay; the timer is forgotten once scheduled.
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(millis, callback).forget();
    }
}

// =============================================================
// Mutations
// =============================================================

/// Store the new state on the watchlist button and restyle it.
///
/// # Errors
///
/// Returns `Js` if a class-list update fails.
pub fn apply_watchlist_view(button: &HtmlButtonElement, view: &WatchlistView) -> Result<(), DomError> {
    button.set_value(view.value);
    let classes = button.class_list();
    classes.remove_1(view.remove_class)?;
    classes.add_1(view.add_class)?;
    button.set_inner_html(view.label);
    Ok(())
}

pub fn clear_input(input: &HtmlInputElement) {
    input.set_value("");
}

pub fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Parse `markup` and insert it as the first child of `list`.
///
/// # Errors
///
/// As [`html_to_element`], plus `Js` if insertion fails.
pub fn prepend_markup(document: &Document, list: &Element, markup: &str) -> Result<(), DomError> {
    let item = html_to_element(document, markup)?;
    list.prepend_with_node_1(&item)?;
    Ok(())
}
