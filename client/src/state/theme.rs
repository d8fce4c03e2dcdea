//! Light/dark theme preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Persisted colour scheme. Anything unrecognised reads as `Light`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Stored string form (`"light"` / `"dark"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parse a stored value, defaulting to `Light`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    /// Icon shown on the toggle: a moon offers dark mode, a sun offers light.
    pub fn icon_class(self) -> &'static str {
        match self {
            ThemePreference::Light => "fas fa-moon",
            ThemePreference::Dark => "fas fa-sun",
        }
    }
}
