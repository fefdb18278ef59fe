//! Application settings management
//!
//! The theme preference, stored as a bare string under its own key.

use crate::config::storage::THEME_KEY;
use crate::data::storage::KeyValueStore;
use crate::error::{AppError, Result};
use std::fmt;
use std::str::FromStr;

/// Theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Follow system theme
    #[default]
    System,
    /// Always light theme
    Light,
    /// Always dark theme
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Check if this theme prefers dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Theme selected by the toggle button: dark goes light, anything else goes dark
    pub fn toggled(&self) -> Theme {
        if self.is_dark() {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Theme::System),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(AppError::Config(format!(
                "unknown theme '{}' (expected system, light, or dark)",
                other
            ))),
        }
    }
}

/// Persisted user preferences
///
/// Like favorites, the in-memory value is authoritative: a failed write is
/// logged and the store is marked dirty.
pub struct Settings<S> {
    store: S,
    theme: Theme,
    /// Whether the last write to `store` failed
    dirty: bool,
}

impl<S: KeyValueStore> Settings<S> {
    /// Load settings, falling back to defaults for anything missing or unreadable
    pub fn load(store: S) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read theme, using default");
                Theme::default()
            }
        };
        Self {
            store,
            theme,
            dirty: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set the theme and write it through
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.persist() {
            tracing::warn!(error = %e, theme = %theme, "failed to persist theme, keeping in-memory value");
        }
    }

    /// Flip between dark and light, returning the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    /// Write the current theme to the store
    pub fn persist(&mut self) -> Result<()> {
        let result = self.store.set(THEME_KEY, self.theme.as_str());
        self.dirty = result.is_err();
        result
    }

    /// Whether the last write failed
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
