//! Binder configuration: storage key, selectors, class names, timings.
//!
//! Every field has a default matching the stock site markup. A page can
//! override any subset with a JSON block:
//!
//! ```html
//! <script type="application/json" id="pagewire-config">
//!   { "selectors": { "nav_panel": "#mobile-menu" }, "timings": { "close_fallback_ms": 250 } }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DEFAULT_CLOSE_FALLBACK_MS, DEFAULT_FOCUS_DELAY_MS, DEFAULT_STORAGE_KEY};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage_key: String,
    pub selectors: Selectors,
    pub classes: Classes,
    pub timings: Timings,
    /// Open search on `/` and `Ctrl/Cmd+K`.
    pub search_shortcut: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            selectors: Selectors::default(),
            classes: Classes::default(),
            timings: Timings::default(),
            search_shortcut: true,
        }
    }
}

/// CSS selectors used to locate each feature's elements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_toggle: String,
    pub nav_trigger: String,
    pub nav_panel: String,
    /// Links inside the nav panel, relative to the panel.
    pub nav_links: String,
    /// Containers that each form one accordion group.
    pub disclosure_groups: String,
    /// Disclosures inside a group container, relative to the container.
    pub disclosures: String,
    pub search_trigger: String,
    pub search_dialog: String,
    /// Relative to the dialog.
    pub search_close: String,
    /// Relative to the dialog.
    pub search_input: String,
    /// Relative to the dialog.
    pub search_hints: String,
    pub header: String,
    pub skip_link: String,
    pub main_content: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: "#theme-toggle".to_owned(),
            nav_trigger: "#nav-toggle".to_owned(),
            nav_panel: "#nav-panel".to_owned(),
            nav_links: "a".to_owned(),
            disclosure_groups: "nav".to_owned(),
            disclosures: "details".to_owned(),
            search_trigger: "#search-toggle".to_owned(),
            search_dialog: "#search-dialog".to_owned(),
            search_close: ".search-close".to_owned(),
            search_input: "input[type=search]".to_owned(),
            search_hints: ".search-hint".to_owned(),
            header: "header".to_owned(),
            skip_link: ".skip-link".to_owned(),
            main_content: "#main-content".to_owned(),
        }
    }
}

impl Selectors {
    fn named(&self) -> [(&'static str, &str); 14] {
        [
            ("theme_toggle", self.theme_toggle.as_str()),
            ("nav_trigger", self.nav_trigger.as_str()),
            ("nav_panel", self.nav_panel.as_str()),
            ("nav_links", self.nav_links.as_str()),
            ("disclosure_groups", self.disclosure_groups.as_str()),
            ("disclosures", self.disclosures.as_str()),
            ("search_trigger", self.search_trigger.as_str()),
            ("search_dialog", self.search_dialog.as_str()),
            ("search_close", self.search_close.as_str()),
            ("search_input", self.search_input.as_str()),
            ("search_hints", self.search_hints.as_str()),
            ("header", self.header.as_str()),
            ("skip_link", self.skip_link.as_str()),
            ("main_content", self.main_content.as_str()),
        ]
    }
}

/// Class names the binder toggles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Classes {
    /// Added to `<body>` while the nav panel is open.
    pub scroll_lock: String,
    /// Added to the dialog while its close animation runs.
    pub dialog_closing: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self { scroll_lock: "nav-open".to_owned(), dialog_closing: "closing".to_owned() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub focus_delay_ms: u32,
    pub close_fallback_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self { focus_delay_ms: DEFAULT_FOCUS_DELAY_MS, close_fallback_ms: DEFAULT_CLOSE_FALLBACK_MS }
    }
}

impl Config {
    /// Parse a JSON override block on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.timings.close_fallback_ms == 0 {
            return Err(ConfigError::ZeroCloseFallback);
        }
        if let Some((name, _)) = self.selectors.named().into_iter().find(|(_, sel)| sel.trim().is_empty()) {
            return Err(ConfigError::EmptySelector(name));
        }
        Ok(())
    }
}
