//! Event routing across the feature cores.
//!
//! `BinderCore` holds one optional core per feature. A feature whose required
//! elements were not found at bind time is simply absent, and events for it
//! produce no actions. Kept free of browser types so it can be tested
//! natively; the `dom` host wraps it.

#[cfg(test)]
#[path = "binder_test.rs"]
mod binder_test;

use crate::action::{Action, Timer};
use crate::config::Config;
use crate::disclosure::{Disclosures, GroupId};
use crate::event::UiEvent;
use crate::nav::NavPanel;
use crate::search::SearchDialog;
use crate::skip_link::SkipLink;
use crate::store::PreferenceStore;
use crate::theme::ThemeSwitcher;

/// Which feature elements the host found on the page.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default)]
pub struct Presence {
    pub theme_toggle: bool,
    /// Hamburger trigger and panel both present.
    pub nav: bool,
    /// `(group, initially_open)` for every disclosure, in document order.
    pub disclosures: Vec<(GroupId, bool)>,
    /// Dialog and its text field both present.
    pub search: bool,
    /// Skip link and main landmark both present.
    pub skip_link: bool,
}

pub struct BinderCore<S> {
    theme: Option<ThemeSwitcher<S>>,
    nav: Option<NavPanel>,
    disclosures: Option<Disclosures>,
    search: Option<SearchDialog>,
    skip_link: Option<SkipLink>,
}

impl<S: PreferenceStore> BinderCore<S> {
    #[must_use]
    pub fn new(config: &Config, presence: &Presence, store: S) -> Self {
        let core = Self {
            theme: presence.theme_toggle.then(|| ThemeSwitcher::new(store, config.storage_key.clone())),
            nav: presence.nav.then(|| NavPanel::new(config.classes.scroll_lock.clone())),
            disclosures: (!presence.disclosures.is_empty())
                .then(|| Disclosures::new(presence.disclosures.iter().copied())),
            search: presence.search.then(|| {
                SearchDialog::new(config.classes.dialog_closing.clone(), config.timings, config.search_shortcut)
            }),
            skip_link: presence.skip_link.then(SkipLink::new),
        };
        log::info!("pagewire: enabled features [{}]", core.enabled().join(", "));
        core
    }

    /// Names of the enabled features.
    #[must_use]
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            (self.theme.is_some(), "theme"),
            (self.nav.is_some(), "nav"),
            (self.disclosures.is_some(), "disclosure"),
            (self.search.is_some(), "search"),
            (self.skip_link.is_some(), "skip-link"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }

    /// Load-time actions: restore the saved theme and sync the nav attributes.
    #[must_use]
    pub fn init(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(theme) = &self.theme {
            actions.extend(theme.restore());
        }
        if let Some(nav) = &self.nav {
            actions.extend(nav.init());
        }
        actions
    }

    /// Route one event to the feature(s) that listen for it.
    pub fn dispatch(&mut self, event: UiEvent) -> Vec<Action> {
        match event {
            UiEvent::ThemeToggleClick { current, prefers_dark } => {
                self.theme.as_ref().map(|t| t.toggle(current, prefers_dark)).unwrap_or_default()
            }
            UiEvent::NavTriggerClick => self.nav.as_mut().map(NavPanel::toggle).unwrap_or_default(),
            UiEvent::NavPanelClick { on_background } => {
                self.nav.as_mut().map(|n| n.on_panel_click(on_background)).unwrap_or_default()
            }
            UiEvent::NavLinkClick => self.nav.as_mut().map(NavPanel::on_link_click).unwrap_or_default(),
            UiEvent::KeyDown { key, modifiers, in_editable, dialog_open } => {
                let mut actions = Vec::new();
                if key.is_escape() {
                    if let Some(nav) = self.nav.as_mut() {
                        actions.extend(nav.on_escape());
                    }
                    if let Some(disclosures) = self.disclosures.as_mut() {
                        actions.extend(disclosures.on_escape());
                    }
                }
                if let Some(search) = self.search.as_mut() {
                    actions.extend(search.on_key(&key, modifiers, in_editable, dialog_open));
                }
                actions
            }
            UiEvent::DocumentClick { inside } => {
                self.disclosures.as_mut().map(|d| d.on_document_click(&inside)).unwrap_or_default()
            }
            UiEvent::DisclosureToggle { index, open } => {
                self.disclosures.as_mut().map(|d| d.on_toggle(index, open)).unwrap_or_default()
            }
            UiEvent::SearchTriggerClick { dialog_open } => {
                self.search.as_mut().map(|s| s.open(dialog_open)).unwrap_or_default()
            }
            UiEvent::SearchCloseClick { dialog_open } => {
                self.search.as_mut().map(|s| s.begin_close(dialog_open)).unwrap_or_default()
            }
            UiEvent::SearchDialogClick { point, bounds, dialog_open } => {
                self.search.as_mut().map(|s| s.on_dialog_click(point, bounds, dialog_open)).unwrap_or_default()
            }
            UiEvent::SearchCancel { dialog_open } => {
                self.search.as_mut().map(|s| s.on_cancel(dialog_open)).unwrap_or_default()
            }
            UiEvent::SearchAnimationEnd { dialog_open } => {
                self.search.as_mut().map(|s| s.on_animation_end(dialog_open)).unwrap_or_default()
            }
            UiEvent::SearchHintClick { label } => self.search.as_ref().map(|s| s.fill_hint(&label)).unwrap_or_default(),
            UiEvent::SkipLinkClick { target_top, scroll_y, header_height, focusable } => self
                .skip_link
                .as_mut()
                .map(|s| s.activate(target_top, scroll_y, header_height, focusable))
                .unwrap_or_default(),
            UiEvent::MainContentBlur => self.skip_link.as_mut().map(SkipLink::on_blur).unwrap_or_default(),
            UiEvent::TimerElapsed { timer, dialog_open } => {
                let Some(search) = self.search.as_mut() else {
                    return Vec::new();
                };
                match timer {
                    Timer::SearchFocus => search.on_focus_due(dialog_open),
                    Timer::SearchCloseFallback { generation } => search.on_close_fallback(generation, dialog_open),
                }
            }
        }
    }
}
