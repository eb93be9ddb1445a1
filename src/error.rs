//! Error types for the browser host and configuration.
//!
//! Nothing here is fatal to the page: the host logs these and carries on,
//! with the affected feature simply not reacting.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::action::Target;

/// Failures while binding to or mutating the DOM.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// No global `window` (not running in a browser).
    #[error("no window")]
    MissingWindow,

    /// The window has no document.
    #[error("no document")]
    MissingDocument,

    /// An action addressed an element that was not found at bind time.
    #[error("element not bound: {0:?}")]
    MissingElement(Target),

    /// An element was found but is not of the expected type.
    #[error("element {target:?} is not a {expected}")]
    WrongElement { target: Target, expected: &'static str },

    /// A DOM call threw.
    #[error("js exception: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return Self::Js(String::from(err.message()));
        }
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Failures parsing the JSON config block.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The block is not valid JSON or has mistyped fields.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// `storage_key` was set to an empty string.
    #[error("storage_key must not be empty")]
    EmptyStorageKey,

    /// `timings.close_fallback_ms` was zero, which would close before any animation runs.
    #[error("timings.close_fallback_ms must be greater than zero")]
    ZeroCloseFallback,

    /// A selector was set to an empty string.
    #[error("selector {0} must not be empty")]
    EmptySelector(&'static str),
}
