//! Light/dark preference.
//!
//! Persisted under `blog-theme` through a small key-value seam so the
//! browser can back it with `localStorage` and tests with a map.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

pub const THEME_STORAGE_KEY: &str = "blog-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown values are `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-effort string storage. Writes that fail are dropped.
pub trait ThemeStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Map-backed storage for tests and the CLI.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RwLock<HashMap<String, String>>,
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.values.read().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }
}

pub struct ThemeStore<S> {
    storage: S,
    current: RwLock<Theme>,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Read the persisted preference, defaulting to light.
    pub fn load(storage: S) -> Self {
        let current = storage
            .load(THEME_STORAGE_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        Self { storage, current: RwLock::new(current) }
    }

    pub fn theme(&self) -> Theme {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Flip and persist. Returns the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.theme().toggled();
        self.set(next);
        next
    }

    pub fn set(&self, theme: Theme) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = theme;
        self.storage.save(THEME_STORAGE_KEY, theme.as_str());
        tracing::debug!(%theme, "theme set");
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
