use super::*;

#[test]
fn default_is_light() {
    assert_eq!(ThemePreference::default(), ThemePreference::Light);
}

#[test]
fn from_stored_defaults_to_light() {
    assert_eq!(ThemePreference::from_stored(None), ThemePreference::Light);
    assert_eq!(ThemePreference::from_stored(Some("")), ThemePreference::Light);
    assert_eq!(ThemePreference::from_stored(Some("DARK")), ThemePreference::Light);
    assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
    assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
}

#[test]
fn stored_form_round_trips() {
    for pref in [ThemePreference::Light, ThemePreference::Dark] {
        assert_eq!(ThemePreference::from_stored(Some(pref.as_str())), pref);
    }
}

#[test]
fn toggled_twice_is_identity() {
    for pref in [ThemePreference::Light, ThemePreference::Dark] {
        assert_ne!(pref.toggled(), pref);
        assert_eq!(pref.toggled().toggled(), pref);
    }
}

#[test]
fn icon_swaps_between_moon_and_sun() {
    assert!(ThemePreference::Light.icon_class().contains("fa-moon"));
    assert!(ThemePreference::Dark.icon_class().contains("fa-sun"));
}

