//! Page configuration for the listing-page controls.
//!
//! DESIGN
//! ======
//! Every selector, delay and CSRF name the controls depend on lives here with
//! a `DEFAULT_*` constant. A page may override any subset through an inline
//! `<script type="application/json" id="auction-config">` element; missing
//! keys keep their defaults and unknown keys are ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the optional inline JSON configuration script.
pub const CONFIG_ELEMENT_ID: &str = "auction-config";

pub const DEFAULT_WATCHLIST_SELECTOR: &str = "#watchlist";
pub const DEFAULT_FLASH_SELECTOR: &str = ".flash_message";
pub const DEFAULT_BID_INPUT_SELECTOR: &str = "#bid_input";
pub const DEFAULT_BID_BUTTON_SELECTOR: &str = "#bid_button";
pub const DEFAULT_PRICE_SELECTOR: &str = "#current_price";
pub const DEFAULT_COMMENT_INPUT_SELECTOR: &str = "#comment_input";
pub const DEFAULT_COMMENT_BUTTON_SELECTOR: &str = "#comment_button";
pub const DEFAULT_COMMENT_LIST_SELECTOR: &str = "#comment_list";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_FLASH_LIFETIME_MS: u32 = 3000;
pub const DEFAULT_INLINE_ERROR_LIFETIME_MS: u32 = 2000;
pub const DEFAULT_PRICE_PREFIX: &str = "$ ";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("flash lifetime must be positive")]
    ZeroLifetime,
}

/// How the current price is rendered after a successful bid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceFormat {
    /// Amount as returned by the server, e.g. `$ 150`.
    #[default]
    Plain,
    /// Integer cents with two decimals and thousands commas, e.g. `$ 7,589.54`.
    Cents,
}

/// Selectors, timings and request settings for one listing page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub watchlist_selector: String,
    pub flash_selector: String,
    pub bid_input_selector: String,
    pub bid_button_selector: String,
    pub price_selector: String,
    pub comment_input_selector: String,
    pub comment_button_selector: String,
    pub comment_list_selector: String,
    /// Cookie holding the CSRF token.
    pub csrf_cookie: String,
    /// Request header the CSRF token is echoed in.
    pub csrf_header: String,
    /// Lifetime of flash messages, in milliseconds.
    pub flash_lifetime_ms: u32,
    /// Lifetime of the inline comment error, in milliseconds.
    pub inline_error_lifetime_ms: u32,
    pub price_prefix: String,
    pub price_format: PriceFormat,
    /// `log` level name for the console logger (`error` .. `trace`).
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            watchlist_selector: DEFAULT_WATCHLIST_SELECTOR.to_owned(),
            flash_selector: DEFAULT_FLASH_SELECTOR.to_owned(),
            bid_input_selector: DEFAULT_BID_INPUT_SELECTOR.to_owned(),
            bid_button_selector: DEFAULT_BID_BUTTON_SELECTOR.to_owned(),
            price_selector: DEFAULT_PRICE_SELECTOR.to_owned(),
            comment_input_selector: DEFAULT_COMMENT_INPUT_SELECTOR.to_owned(),
            comment_button_selector: DEFAULT_COMMENT_BUTTON_SELECTOR.to_owned(),
            comment_list_selector: DEFAULT_COMMENT_LIST_SELECTOR.to_owned(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            csrf_header: DEFAULT_CSRF_HEADER.to_owned(),
            flash_lifetime_ms: DEFAULT_FLASH_LIFETIME_MS,
            inline_error_lifetime_ms: DEFAULT_INLINE_ERROR_LIFETIME_MS,
            price_prefix: DEFAULT_PRICE_PREFIX.to_owned(),
            price_format: PriceFormat::Plain,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override object on top of the defaults.
    ///
    /// Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object matching the config
    /// shape, or if a lifetime is zero.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(text)?;
        if config.flash_lifetime_ms == 0 || config.inline_error_lifetime_ms == 0 {
            return Err(ConfigError::ZeroLifetime);
        }
        Ok(config)
    }
}
