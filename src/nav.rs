//! Mobile navigation panel.
//!
//! Open state is mirrored onto `aria-hidden` (panel), `aria-expanded`
//! (trigger), and a scroll-lock class on `<body>`. Every close path goes
//! through [`NavPanel::close`], which does nothing when already closed.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::action::{Action, Target};
use crate::consts::{ARIA_EXPANDED, ARIA_HIDDEN};

#[derive(Debug, Clone)]
pub struct NavPanel {
    open: bool,
    scroll_lock_class: String,
}

impl NavPanel {
    #[must_use]
    pub fn new(scroll_lock_class: impl Into<String>) -> Self {
        Self { open: false, scroll_lock_class: scroll_lock_class.into() }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Load-time sync so the markup matches the current state.
    #[must_use]
    pub fn init(&self) -> Vec<Action> {
        Self::reflect(self.open)
    }

    pub fn toggle(&mut self) -> Vec<Action> {
        if self.open { self.close() } else { self.open() }
    }

    pub fn open(&mut self) -> Vec<Action> {
        if self.open {
            return Vec::new();
        }
        log::debug!("nav: open");
        self.open = true;
        let mut actions = Self::reflect(true);
        actions.push(Action::AddClass { target: Target::Body, class: self.scroll_lock_class.clone() });
        actions
    }

    pub fn close(&mut self) -> Vec<Action> {
        if !self.open {
            return Vec::new();
        }
        log::debug!("nav: close");
        self.open = false;
        let mut actions = Self::reflect(false);
        actions.push(Action::RemoveClass { target: Target::Body, class: self.scroll_lock_class.clone() });
        actions
    }

    /// Click inside the panel. Only a click on the panel container itself
    /// (its background) closes it.
    pub fn on_panel_click(&mut self, on_background: bool) -> Vec<Action> {
        if on_background { self.close() } else { Vec::new() }
    }

    /// Escape closes an open panel and hands focus back to the trigger.
    pub fn on_escape(&mut self) -> Vec<Action> {
        let mut actions = self.close();
        if !actions.is_empty() {
            actions.push(Action::Focus { target: Target::NavTrigger, prevent_scroll: false });
        }
        actions
    }

    /// A nav link was followed; the page is about to change.
    pub fn on_link_click(&mut self) -> Vec<Action> {
        self.close()
    }

    fn reflect(open: bool) -> Vec<Action> {
        vec![
            Action::SetAttribute { target: Target::NavPanel, name: ARIA_HIDDEN, value: (!open).to_string() },
            Action::SetAttribute { target: Target::NavTrigger, name: ARIA_EXPANDED, value: open.to_string() },
        ]
    }
}
