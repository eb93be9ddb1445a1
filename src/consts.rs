//! Shared constants for the pagewire crate.

// ── Theme ───────────────────────────────────────────────────────

/// Default `localStorage` key holding the theme preference.
pub const DEFAULT_STORAGE_KEY: &str = "pagewire.theme";

/// Attribute on the document root carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query for the OS-level dark preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Accessibility attributes ────────────────────────────────────

pub const ARIA_HIDDEN: &str = "aria-hidden";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_LABEL: &str = "aria-label";
pub const TABINDEX: &str = "tabindex";

// ── Timings ─────────────────────────────────────────────────────

/// Delay between `showModal()` and focusing the search field.
pub const DEFAULT_FOCUS_DELAY_MS: u32 = 50;

/// Fallback for the dialog close animation, in case `animationend` never fires.
pub const DEFAULT_CLOSE_FALLBACK_MS: u32 = 300;

// ── Keys ────────────────────────────────────────────────────────

pub const ESCAPE_KEY: &str = "Escape";

/// Bare key that opens search when focus is outside an editable field.
pub const SEARCH_SHORTCUT_KEY: &str = "/";

/// Key that opens search together with Ctrl or Meta.
pub const SEARCH_SHORTCUT_CHORD_KEY: &str = "k";

// ── Host ────────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "pagewire-config";
