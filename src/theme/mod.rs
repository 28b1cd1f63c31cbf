//! Light/dark theme preference
//!
//! The preference is a single string stored by key. Storage is best-effort:
//! a store that cannot be read behaves as empty, and failed writes are
//! logged and dropped.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Key the theme preference is stored under
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => anyhow::bail!("Unknown theme: {}. Available: light, dark", other),
        }
    }
}

/// String preferences by key; never fails
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// One file per key under a directory
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    dir: PathBuf,
}

impl FilePreferenceStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.dir.join(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value.trim().to_string()),
            Err(e) => {
                tracing::debug!("No stored {} preference at {:?}: {}", key, path, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let result = fs::create_dir_all(&self.dir).and_then(|_| fs::write(self.dir.join(key), value));
        if let Err(e) = result {
            tracing::warn!("Failed to store {} preference in {:?}: {}", key, self.dir, e);
        }
    }
}

/// Stored theme, or `fallback` when nothing usable is stored
pub fn current_theme<S: PreferenceStore>(store: &S, fallback: Theme) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|value| value.parse().ok())
        .unwrap_or(fallback)
}

/// Switch to the other theme and remember it
pub fn toggle_theme<S: PreferenceStore>(store: &S, fallback: Theme) -> Theme {
    let theme = current_theme(store, fallback).toggle();
    set_theme(store, theme);
    theme
}

pub fn set_theme<S: PreferenceStore>(store: &S, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_theme() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light\n".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_fallback_when_nothing_stored() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs"));
        assert_eq!(current_theme(&store, Theme::Dark), Theme::Dark);
    }

    #[test]
    fn test_toggle_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs"));

        assert_eq!(toggle_theme(&store, Theme::Light), Theme::Dark);
        assert_eq!(current_theme(&store, Theme::Light), Theme::Dark);
        assert_eq!(toggle_theme(&store, Theme::Light), Theme::Light);
        assert_eq!(current_theme(&store, Theme::Dark), Theme::Light);
    }

    #[test]
    fn test_garbage_preference_uses_fallback() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path());
        store.set(THEME_KEY, "neon");
        assert_eq!(current_theme(&store, Theme::Light), Theme::Light);
    }

    #[test]
    fn test_unwritable_store_is_swallowed() {
        let dir = TempDir::new().unwrap();
        // A file where the store directory should be
        let blocker = dir.path().join("prefs");
        fs::write(&blocker, "not a directory").unwrap();
        let store = FilePreferenceStore::new(&blocker);

        set_theme(&store, Theme::Dark);
        assert_eq!(store.get(THEME_KEY), None);
        assert_eq!(current_theme(&store, Theme::Light), Theme::Light);
    }
}
