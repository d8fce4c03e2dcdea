use super::*;

const NAVBAR: f64 = 70.0;

fn layout() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("about", 200.0, 400.0),
        SectionBounds::new("contact", 600.0, 300.0),
    ]
}

#[test]
fn default_has_no_active_link_and_flat_navbar() {
    let nav = NavState::default();
    assert_eq!(nav.active_section, None);
    assert!(!nav.elevated);
}

#[test]
fn scroll_marks_exactly_one_link_active() {
    let mut nav = NavState::default();
    nav.apply_scroll(100.0, NAVBAR, &layout());
    assert!(nav.is_active("about"));
    assert!(!nav.is_active("contact"));

    nav.apply_scroll(500.0, NAVBAR, &layout());
    assert!(!nav.is_active("about"));
    assert!(nav.is_active("contact"));
}

#[test]
fn no_match_keeps_previous_active_link() {
    let mut nav = NavState::default();
    nav.apply_scroll(500.0, NAVBAR, &layout());
    assert!(nav.is_active("contact"));

    // contact range is (430, 730]; 5000 matches nothing.
    nav.apply_scroll(5000.0, NAVBAR, &layout());
    assert!(nav.is_active("contact"));
    assert!(nav.elevated);
}

#[test]
fn above_first_section_before_any_match_stays_empty() {
    let mut nav = NavState::default();
    nav.apply_scroll(0.0, NAVBAR, &layout());
    assert_eq!(nav.active_section, None);
    assert!(!nav.elevated);
}

#[test]
fn elevation_tracks_each_tick() {
    let mut nav = NavState::default();
    nav.apply_scroll(51.0, NAVBAR, &[]);
    assert!(nav.elevated);
    nav.apply_scroll(50.0, NAVBAR, &[]);
    assert!(!nav.elevated);
}
