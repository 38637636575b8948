//! Light/dark theme state and its persistence rules.
//!
//! # Design
//! - [`ThemeState`] is the only theme value in the app; views read it from the store.
//! - Toggling persists and applies the document attribute in the same step.
//! - Persistence is best-effort; a failed write leaves a session-only theme.

use crate::core::prefs::PreferenceStore;

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Process-wide display preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    /// `true` when the dark palette is active.
    pub dark_mode: bool,
}

impl ThemeState {
    /// Light theme.
    pub const LIGHT: Self = Self { dark_mode: false };
    /// Dark theme.
    pub const DARK: Self = Self { dark_mode: true };

    /// Mode used for the document attribute.
    #[must_use]
    pub const fn mode(self) -> ThemeMode {
        if self.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
        }
    }

    /// Stored representation (`"true"` / `"false"`).
    #[must_use]
    pub const fn as_persisted(self) -> &'static str {
        if self.dark_mode { "true" } else { "false" }
    }

    /// Parse a stored value; anything other than `"true"`/`"false"` is ignored.
    #[must_use]
    pub fn from_persisted(value: &str) -> Option<Self> {
        match value.trim() {
            "true" => Some(Self::DARK),
            "false" => Some(Self::LIGHT),
            _ => None,
        }
    }
}

/// Sink for the document-level theme attribute.
pub trait ThemeSurface {
    /// Reflect `mode` on the document.
    fn apply(&self, mode: ThemeMode);
}

/// Resolve the startup theme: persisted value, then OS preference, then light.
#[must_use]
pub fn initial_theme<P>(prefs: &P, key: &str, os_prefers_dark: Option<bool>) -> ThemeState
where
    P: PreferenceStore + ?Sized,
{
    if let Some(state) = prefs
        .get(key)
        .as_deref()
        .and_then(ThemeState::from_persisted)
    {
        return state;
    }
    match os_prefers_dark {
        Some(true) => ThemeState::DARK,
        Some(false) | None => ThemeState::LIGHT,
    }
}

/// Flip `state`, persist the result under `key` and apply it to `surface`.
///
/// Returns the new state. Storage failures are ignored.
pub fn toggle_theme<P, S>(state: &mut ThemeState, prefs: &P, key: &str, surface: &S) -> ThemeState
where
    P: PreferenceStore + ?Sized,
    S: ThemeSurface + ?Sized,
{
    *state = state.toggled();
    prefs.set(key, state.as_persisted()).ok();
    surface.apply(state.mode());
    *state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prefs::MemoryPreferences;
    use std::cell::RefCell;

    const KEY: &str = "atrium.darkMode";

    #[derive(Default)]
    struct RecordingSurface {
        applied: RefCell<Vec<ThemeMode>>,
    }

    impl ThemeSurface for RecordingSurface {
        fn apply(&self, mode: ThemeMode) {
            self.applied.borrow_mut().push(mode);
        }
    }

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn persisted_value_wins_over_os_preference() {
        let prefs = MemoryPreferences::with_entry(KEY, "false");
        assert_eq!(initial_theme(&prefs, KEY, Some(true)), ThemeState::LIGHT);

        let prefs = MemoryPreferences::with_entry(KEY, "true");
        assert_eq!(initial_theme(&prefs, KEY, Some(false)), ThemeState::DARK);
    }

    #[test]
    fn os_preference_used_when_nothing_persisted() {
        let prefs = MemoryPreferences::new();
        assert_eq!(initial_theme(&prefs, KEY, Some(true)), ThemeState::DARK);
        assert_eq!(initial_theme(&prefs, KEY, Some(false)), ThemeState::LIGHT);
        assert_eq!(initial_theme(&prefs, KEY, None), ThemeState::LIGHT);
    }

    #[test]
    fn garbage_persisted_value_falls_through() {
        let prefs = MemoryPreferences::with_entry(KEY, "\"dark\"");
        assert_eq!(initial_theme(&prefs, KEY, Some(true)), ThemeState::DARK);
        assert_eq!(initial_theme(&prefs, KEY, None), ThemeState::LIGHT);
    }

    #[test]
    fn double_toggle_restores_and_persists_last_value() {
        let prefs = MemoryPreferences::new();
        let surface = RecordingSurface::default();
        let original = ThemeState::LIGHT;
        let mut state = original;

        let first = toggle_theme(&mut state, &prefs, KEY, &surface);
        assert_eq!(first, ThemeState::DARK);
        assert_eq!(prefs.get(KEY).as_deref(), Some("true"));

        let second = toggle_theme(&mut state, &prefs, KEY, &surface);
        assert_eq!(second, original);
        assert_eq!(state, original);
        assert_eq!(prefs.get(KEY).as_deref(), Some("false"));
        assert_eq!(
            *surface.applied.borrow(),
            vec![ThemeMode::Dark, ThemeMode::Light]
        );
    }

    #[test]
    fn storage_failure_still_flips_session_theme() {
        let prefs = MemoryPreferences::read_only();
        let surface = RecordingSurface::default();
        let mut state = ThemeState::DARK;
        assert_eq!(
            toggle_theme(&mut state, &prefs, KEY, &surface),
            ThemeState::LIGHT
        );
        assert_eq!(prefs.get(KEY), None);
        assert_eq!(*surface.applied.borrow(), vec![ThemeMode::Light]);
    }
}
