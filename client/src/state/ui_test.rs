use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_with_menu_closed() {
    let state = UiState::default();
    assert_eq!(state.theme, ThemePreference::Light);
    assert!(!state.menu_open);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_menu_flips() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_menu_reports_previous_state() {
    let mut state = UiState::default();
    assert!(!state.close_menu());

    state.toggle_menu();
    assert!(state.close_menu());
    assert!(!state.menu_open);
}
