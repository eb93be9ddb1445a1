#![allow(clippy::float_cmp)]

use super::*;

fn scroll_target(actions: &[Action]) -> Option<f64> {
    actions.iter().find_map(|a| match a {
        Action::ScrollTo { top, .. } => Some(*top),
        _ => None,
    })
}

// =============================================================
// Offset
// =============================================================

#[test]
fn offset_subtracts_header_height() {
    assert_eq!(scroll_offset(400.0, 0.0, 64.0), 336.0);
}

#[test]
fn offset_accounts_for_current_scroll() {
    assert_eq!(scroll_offset(-100.0, 900.0, 64.0), 736.0);
}

#[test]
fn offset_never_negative() {
    assert_eq!(scroll_offset(20.0, 0.0, 64.0), 0.0);
}

#[test]
fn offset_without_header() {
    assert_eq!(scroll_offset(250.0, 50.0, 0.0), 300.0);
}

// =============================================================
// Activation
// =============================================================

#[test]
fn activation_prevents_jump_scrolls_then_focuses() {
    let mut link = SkipLink::new();
    let actions = link.activate(500.0, 0.0, 80.0, true);
    assert_eq!(
        actions,
        vec![
            Action::PreventDefault,
            Action::ScrollTo { top: 420.0, smooth: true },
            Action::Focus { target: Target::MainContent, prevent_scroll: true },
        ]
    );
}

#[test]
fn focusable_landmark_keeps_its_tabindex() {
    let mut link = SkipLink::new();
    link.activate(500.0, 0.0, 80.0, true);
    assert!(link.on_blur().is_empty());
}

#[test]
fn unfocusable_landmark_gets_temporary_tabindex() {
    let mut link = SkipLink::new();
    let actions = link.activate(500.0, 0.0, 80.0, false);
    assert_eq!(
        actions[1],
        Action::SetAttribute { target: Target::MainContent, name: TABINDEX, value: "-1".into() }
    );
    assert_eq!(scroll_target(&actions), Some(420.0));

    assert_eq!(link.on_blur(), vec![Action::RemoveAttribute { target: Target::MainContent, name: TABINDEX }]);
    assert!(link.on_blur().is_empty());
}

#[test]
fn repeated_activation_adds_tabindex_once() {
    let mut link = SkipLink::new();
    link.activate(500.0, 0.0, 80.0, false);
    // The attribute we added makes the landmark report as focusable.
    let again = link.activate(500.0, 0.0, 80.0, true);
    assert!(!again.iter().any(|a| matches!(a, Action::SetAttribute { .. })));
    assert_eq!(link.on_blur().len(), 1);
}
