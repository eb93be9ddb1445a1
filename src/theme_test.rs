use std::rc::Rc;

use super::*;
use crate::store::MemoryStore;

const KEY: &str = "pagewire.theme";

fn switcher(store: &Rc<MemoryStore>) -> ThemeSwitcher<Rc<MemoryStore>> {
    ThemeSwitcher::new(Rc::clone(store), KEY)
}

/// The root `data-theme` value an action list leaves behind, if it sets one.
fn root_theme(actions: &[Action]) -> Option<Theme> {
    actions.iter().find_map(|a| match a {
        Action::SetAttribute { target: Target::Root, name, value } if *name == THEME_ATTRIBUTE => Theme::parse(value),
        _ => None,
    })
}

// =============================================================
// Theme
// =============================================================

#[test]
fn parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("true"), None);
}

#[test]
fn flip_is_an_involution() {
    assert_eq!(Theme::Light.flip(), Theme::Dark);
    assert_eq!(Theme::Dark.flip().flip(), Theme::Dark);
}

#[test]
fn effective_prefers_explicit_attribute() {
    assert_eq!(effective(Some(Theme::Light), true), Theme::Light);
    assert_eq!(effective(Some(Theme::Dark), false), Theme::Dark);
}

#[test]
fn effective_falls_back_to_os_preference() {
    assert_eq!(effective(None, true), Theme::Dark);
    assert_eq!(effective(None, false), Theme::Light);
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_without_saved_preference_does_nothing() {
    let store = Rc::new(MemoryStore::new());
    assert!(switcher(&store).restore().is_empty());
}

#[test]
fn restore_ignores_garbage_value() {
    let store = Rc::new(MemoryStore::with_entry(KEY, "purple"));
    assert!(switcher(&store).restore().is_empty());
}

#[test]
fn restore_applies_saved_theme_and_label() {
    let store = Rc::new(MemoryStore::with_entry(KEY, "dark"));
    let actions = switcher(&store).restore();
    assert_eq!(root_theme(&actions), Some(Theme::Dark));
    assert!(actions.contains(&Action::SetAttribute {
        target: Target::ThemeToggle,
        name: ARIA_LABEL,
        value: "Switch to light theme".into(),
    }));
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_from_os_dark_yields_light_then_dark() {
    let store = Rc::new(MemoryStore::new());
    let sw = switcher(&store);

    let first = sw.toggle(None, true);
    assert_eq!(root_theme(&first), Some(Theme::Light));
    assert_eq!(store.get(KEY).as_deref(), Some("light"));

    let second = sw.toggle(root_theme(&first), true);
    assert_eq!(root_theme(&second), Some(Theme::Dark));
    assert_eq!(store.get(KEY).as_deref(), Some("dark"));
}

#[test]
fn toggling_twice_restores_original_value() {
    let store = Rc::new(MemoryStore::with_entry(KEY, "light"));
    let sw = switcher(&store);
    let start = sw.saved();

    let once = sw.toggle(start, false);
    let twice = sw.toggle(root_theme(&once), false);

    assert_eq!(root_theme(&twice), start);
    assert_eq!(sw.saved(), start);
}

#[test]
fn toggle_updates_trigger_label() {
    let store = Rc::new(MemoryStore::new());
    let actions = switcher(&store).toggle(Some(Theme::Dark), true);
    assert!(actions.contains(&Action::SetAttribute {
        target: Target::ThemeToggle,
        name: ARIA_LABEL,
        value: "Switch to dark theme".into(),
    }));
}

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}
}

#[test]
fn unavailable_storage_still_toggles() {
    let sw = ThemeSwitcher::new(BrokenStore, KEY);
    assert!(sw.restore().is_empty());
    let actions = sw.toggle(None, false);
    assert_eq!(root_theme(&actions), Some(Theme::Dark));
    assert_eq!(sw.saved(), None);
}
