//! Skip-to-content link.
//!
//! Replaces the default jump with a smooth scroll that stops below the sticky
//! header, then focuses the main landmark without scrolling again. A landmark
//! that is not already focusable gets a temporary `tabindex="-1"`, removed on
//! blur so the tab order is left as it was.

#[cfg(test)]
#[path = "skip_link_test.rs"]
mod skip_link_test;

use crate::action::{Action, Target};
use crate::consts::TABINDEX;

/// Document offset that puts a landmark just below the sticky header.
#[must_use]
pub fn scroll_offset(target_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    (target_top + scroll_y - header_height).max(0.0)
}

#[derive(Debug, Clone, Default)]
pub struct SkipLink {
    added_tabindex: bool,
}

impl SkipLink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self, target_top: f64, scroll_y: f64, header_height: f64, focusable: bool) -> Vec<Action> {
        let top = scroll_offset(target_top, scroll_y, header_height);
        log::debug!("skip link: scrolling to {top}");

        let mut actions = vec![Action::PreventDefault];
        if !focusable && !self.added_tabindex {
            self.added_tabindex = true;
            actions.push(Action::SetAttribute { target: Target::MainContent, name: TABINDEX, value: "-1".to_owned() });
        }
        actions.push(Action::ScrollTo { top, smooth: true });
        actions.push(Action::Focus { target: Target::MainContent, prevent_scroll: true });
        actions
    }

    /// Landmark blurred: drop the temporary `tabindex`, if we added one.
    pub fn on_blur(&mut self) -> Vec<Action> {
        if !self.added_tabindex {
            return Vec::new();
        }
        self.added_tabindex = false;
        vec![Action::RemoveAttribute { target: Target::MainContent, name: TABINDEX }]
    }
}
