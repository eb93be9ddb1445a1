//! Input model: the events the browser host feeds into the binder.
//!
//! Each `UiEvent` variant corresponds to one DOM listener. The host captures
//! whatever live DOM facts the receiving core needs (the native dialog `open`
//! flag, bounding boxes, the header's rendered height) at dispatch time, so
//! the cores never query the page themselves.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use crate::action::Timer;
use crate::consts::{ESCAPE_KEY, SEARCH_SHORTCUT_CHORD_KEY, SEARCH_SHORTCUT_KEY};
use crate::theme::Theme;

/// A point in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An element's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Whether `point` lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A keyboard key as reported by `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == ESCAPE_KEY
    }

    /// Whether this key, with `modifiers`, is the search shortcut.
    ///
    /// `/` alone, or `Ctrl+K` / `Cmd+K`.
    #[must_use]
    pub fn is_search_shortcut(&self, modifiers: Modifiers) -> bool {
        let chord = modifiers.ctrl || modifiers.meta;
        if self.0 == SEARCH_SHORTCUT_KEY {
            return !chord && !modifiers.alt;
        }
        chord && !modifiers.alt && self.0.eq_ignore_ascii_case(SEARCH_SHORTCUT_CHORD_KEY)
    }
}

/// Events delivered by the host, one variant per listener.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The theme trigger was activated.
    ThemeToggleClick {
        /// Valid theme currently set on the document root, if any.
        current: Option<Theme>,
        /// OS-level `prefers-color-scheme: dark` signal.
        prefers_dark: bool,
    },
    /// The hamburger trigger was activated.
    NavTriggerClick,
    /// A click landed on the nav panel or one of its descendants.
    NavPanelClick {
        /// The click target is the panel container itself.
        on_background: bool,
    },
    /// A navigation link inside the panel was activated.
    NavLinkClick,
    /// Document-level `keydown`.
    KeyDown {
        key: Key,
        modifiers: Modifiers,
        /// Focus is in an input, textarea, select, or contenteditable.
        in_editable: bool,
        /// The search dialog's live `open` flag.
        dialog_open: bool,
    },
    /// Document-level click.
    DocumentClick {
        /// Indices of the disclosures that contain the click target.
        inside: Vec<usize>,
    },
    /// A disclosure's native `toggle` event.
    DisclosureToggle { index: usize, open: bool },
    /// The search trigger was activated.
    SearchTriggerClick { dialog_open: bool },
    /// The dialog's close button was activated.
    SearchCloseClick { dialog_open: bool },
    /// A pointer click on the dialog element (content or backdrop).
    SearchDialogClick { point: Point, bounds: Rect, dialog_open: bool },
    /// The dialog's native `cancel` event (Escape).
    SearchCancel { dialog_open: bool },
    /// `animationend` on the dialog.
    SearchAnimationEnd { dialog_open: bool },
    /// A quick-search hint was activated; carries its trimmed label text.
    SearchHintClick { label: String },
    /// The skip link was activated.
    SkipLinkClick {
        /// Landmark top relative to the viewport.
        target_top: f64,
        /// Current vertical scroll position of the page.
        scroll_y: f64,
        /// Rendered height of the sticky header, 0 when there is none.
        header_height: f64,
        /// The landmark already carries a `tabindex`.
        focusable: bool,
    },
    /// The main-content landmark lost focus.
    MainContentBlur,
    /// A timer requested through [`crate::action::Action::Schedule`] fired.
    TimerElapsed { timer: Timer, dialog_open: bool },
}
