use super::*;

// =============================================================
// Rect
// =============================================================

#[test]
fn rect_contains_interior_point() {
    let r = Rect::new(100.0, 50.0, 400.0, 300.0);
    assert!(r.contains(Point::new(300.0, 200.0)));
}

#[test]
fn rect_contains_edges() {
    let r = Rect::new(100.0, 50.0, 400.0, 300.0);
    assert!(r.contains(Point::new(100.0, 50.0)));
    assert!(r.contains(Point::new(500.0, 350.0)));
}

#[test]
fn rect_excludes_backdrop_points() {
    let r = Rect::new(100.0, 50.0, 400.0, 300.0);
    assert!(!r.contains(Point::new(99.0, 200.0)));
    assert!(!r.contains(Point::new(300.0, 351.0)));
    assert!(!r.contains(Point::new(0.0, 0.0)));
}

// =============================================================
// Key
// =============================================================

#[test]
fn escape_is_recognized() {
    assert!(Key("Escape".into()).is_escape());
    assert!(!Key("Esc".into()).is_escape());
    assert!(!Key("Enter".into()).is_escape());
}

#[test]
fn slash_alone_is_search_shortcut() {
    let key = Key("/".into());
    assert!(key.is_search_shortcut(Modifiers::default()));
    assert!(!key.is_search_shortcut(Modifiers { ctrl: true, ..Default::default() }));
}

#[test]
fn ctrl_or_meta_k_is_search_shortcut() {
    let key = Key("k".into());
    assert!(key.is_search_shortcut(Modifiers { ctrl: true, ..Default::default() }));
    assert!(key.is_search_shortcut(Modifiers { meta: true, ..Default::default() }));
    assert!(Key("K".into()).is_search_shortcut(Modifiers { ctrl: true, shift: true, ..Default::default() }));
}

#[test]
fn plain_k_is_not_search_shortcut() {
    assert!(!Key("k".into()).is_search_shortcut(Modifiers::default()));
    assert!(!Key("k".into()).is_search_shortcut(Modifiers { ctrl: true, alt: true, ..Default::default() }));
}

// =============================================================
// UiEvent
// =============================================================

#[test]
fn key_events_compare_by_modifiers() {
    let key_down = |ctrl| UiEvent::KeyDown {
        key: Key("k".into()),
        modifiers: Modifiers { ctrl, ..Default::default() },
        in_editable: false,
        dialog_open: false,
    };
    assert_eq!(key_down(true), key_down(true));
    assert_ne!(key_down(true), key_down(false));
}
