//! Search dialog show/hide sequencing.
//!
//! ```text
//! Closed --trigger--> Open --close/backdrop/Escape--> Closing --animationend|fallback--> Closed
//! ```
//!
//! The native `<dialog>` owns open/closed; every event that needs it carries
//! the live `open` flag. The core only mirrors the `closing` marker class and
//! a generation counter that lets a stale fallback timer recognise itself.
//!
//! Completion (`animationend` or fallback) only acts while `Closing` and only
//! calls `close()` on a dialog that is still open, so whichever path runs
//! second is a no-op.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::action::{Action, Target, Timer};
use crate::config::Timings;
use crate::event::{Key, Modifiers, Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Closed,
    Open,
    Closing,
}

#[derive(Debug, Clone)]
pub struct SearchDialog {
    closing: bool,
    generation: u32,
    closing_class: String,
    timings: Timings,
    shortcut: bool,
}

impl SearchDialog {
    #[must_use]
    pub fn new(closing_class: impl Into<String>, timings: Timings, shortcut: bool) -> Self {
        Self { closing: false, generation: 0, closing_class: closing_class.into(), timings, shortcut }
    }

    #[must_use]
    pub fn phase(&self, dialog_open: bool) -> DialogPhase {
        match (dialog_open, self.closing) {
            (false, _) => DialogPhase::Closed,
            (true, false) => DialogPhase::Open,
            (true, true) => DialogPhase::Closing,
        }
    }

    /// Trigger activation. Opening during `Closing` cancels the close; a
    /// dialog closed natively mid-close is shown again.
    pub fn open(&mut self, dialog_open: bool) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.closing {
            self.closing = false;
            actions.push(self.clear_marker());
        }
        if dialog_open {
            log::debug!("search: close cancelled by reopen");
        } else {
            log::debug!("search: open");
            actions.push(Action::ShowModal);
        }
        actions.push(Action::Schedule { timer: Timer::SearchFocus, delay_ms: self.timings.focus_delay_ms });
        actions
    }

    /// Focus timer fired. Skipped if the dialog was closed in the meantime.
    #[must_use]
    pub fn on_focus_due(&self, dialog_open: bool) -> Vec<Action> {
        if self.phase(dialog_open) != DialogPhase::Open {
            return Vec::new();
        }
        vec![Action::Focus { target: Target::SearchInput, prevent_scroll: false }]
    }

    /// Enter `Closing`: add the marker and arm the fallback timer.
    pub fn begin_close(&mut self, dialog_open: bool) -> Vec<Action> {
        if self.phase(dialog_open) != DialogPhase::Open {
            return Vec::new();
        }
        self.closing = true;
        self.generation = self.generation.wrapping_add(1);
        log::debug!("search: closing (generation {})", self.generation);
        vec![
            Action::AddClass { target: Target::SearchDialog, class: self.closing_class.clone() },
            Action::Schedule {
                timer: Timer::SearchCloseFallback { generation: self.generation },
                delay_ms: self.timings.close_fallback_ms,
            },
        ]
    }

    /// Click on the dialog element; outside its content box means backdrop.
    pub fn on_dialog_click(&mut self, point: Point, bounds: Rect, dialog_open: bool) -> Vec<Action> {
        if bounds.contains(point) {
            return Vec::new();
        }
        self.begin_close(dialog_open)
    }

    /// Native `cancel` (Escape). The default close is suppressed so the
    /// animated close runs instead.
    pub fn on_cancel(&mut self, dialog_open: bool) -> Vec<Action> {
        let mut actions = vec![Action::PreventDefault];
        actions.extend(self.begin_close(dialog_open));
        actions
    }

    /// `animationend` on the dialog. Open animations also end here and are
    /// ignored because the marker is not set.
    pub fn on_animation_end(&mut self, dialog_open: bool) -> Vec<Action> {
        self.finish_close(dialog_open)
    }

    /// Fallback timer fired.
    pub fn on_close_fallback(&mut self, generation: u32, dialog_open: bool) -> Vec<Action> {
        if generation != self.generation {
            return Vec::new();
        }
        self.finish_close(dialog_open)
    }

    /// Quick-search hint: copy its label into the field and focus it. The
    /// hint's own default (submit, dialog close, navigation) is suppressed.
    #[must_use]
    pub fn fill_hint(&self, label: &str) -> Vec<Action> {
        vec![
            Action::PreventDefault,
            Action::SetValue { target: Target::SearchInput, value: label.to_owned() },
            Action::Focus { target: Target::SearchInput, prevent_scroll: false },
        ]
    }

    /// Document `keydown`: `/` or `Ctrl/Cmd+K` opens search outside editable fields.
    pub fn on_key(&mut self, key: &Key, modifiers: Modifiers, in_editable: bool, dialog_open: bool) -> Vec<Action> {
        if !self.shortcut || in_editable || !key.is_search_shortcut(modifiers) {
            return Vec::new();
        }
        let mut actions = vec![Action::PreventDefault];
        actions.extend(self.open(dialog_open));
        actions
    }

    fn finish_close(&mut self, dialog_open: bool) -> Vec<Action> {
        if !self.closing {
            return Vec::new();
        }
        self.closing = false;
        let mut actions = vec![self.clear_marker()];
        if dialog_open {
            log::debug!("search: closed");
            actions.push(Action::CloseModal);
        }
        actions
    }

    fn clear_marker(&self) -> Action {
        Action::RemoveClass { target: Target::SearchDialog, class: self.closing_class.clone() }
    }
}
