//! Light/dark theme restore and toggle.
//!
//! The saved preference is applied as a `data-theme` attribute on `<html>`.
//! Toggling resolves the effective theme (explicit attribute first, then the
//! OS `prefers-color-scheme` signal), flips it, applies it, and persists it.
//!
//! TRADE-OFFS
//! ==========
//! Restore runs when the binder starts, after first paint. A page that does
//! not set `data-theme` synchronously in `<head>` may briefly render in the
//! OS theme before the saved one is applied. That flash is accepted.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::action::{Action, Target};
use crate::consts::{ARIA_LABEL, THEME_ATTRIBUTE};
use crate::store::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored or attribute value. Anything but `light`/`dark` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible label for the trigger while this theme is active.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }
}

/// The theme in effect: the explicit attribute if set, else the OS preference.
#[must_use]
pub fn effective(current: Option<Theme>, prefers_dark: bool) -> Theme {
    current.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

pub struct ThemeSwitcher<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemeSwitcher<S> {
    #[must_use]
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// The persisted preference, if any valid one is stored.
    #[must_use]
    pub fn saved(&self) -> Option<Theme> {
        self.store.get(&self.key).as_deref().and_then(Theme::parse)
    }

    /// Load-time restore. Empty when nothing valid is saved.
    #[must_use]
    pub fn restore(&self) -> Vec<Action> {
        match self.saved() {
            Some(theme) => {
                log::debug!("theme: restoring {}", theme.as_str());
                apply(theme)
            }
            None => Vec::new(),
        }
    }

    /// Flip the effective theme, persist it, and return the DOM updates.
    pub fn toggle(&self, current: Option<Theme>, prefers_dark: bool) -> Vec<Action> {
        let next = effective(current, prefers_dark).flip();
        log::debug!("theme: switching to {}", next.as_str());
        self.store.set(&self.key, next.as_str());
        apply(next)
    }
}

fn apply(theme: Theme) -> Vec<Action> {
    vec![
        Action::SetAttribute { target: Target::Root, name: THEME_ATTRIBUTE, value: theme.as_str().to_owned() },
        Action::SetAttribute { target: Target::ThemeToggle, name: ARIA_LABEL, value: theme.toggle_label().to_owned() },
    ]
}
