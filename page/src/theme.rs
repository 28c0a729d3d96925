//! Light/dark theme preference.
//!
//! The preference lives under one key in durable storage and is mirrored as
//! the `data-theme` attribute on the page root. Storage is reached through
//! [`PreferenceStore`] so the same rules run against `localStorage` in the
//! browser and [`MemoryStore`] in tests.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::action::{Action, Target, Task};
use crate::config::PageConfig;
use crate::consts::THEME_ATTRIBUTE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}'")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Write(String),
}

/// Durable string key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory [`PreferenceStore`]; survives as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Read the stored preference. Absent or unrecognized values mean [`Theme::Light`].
pub fn stored_theme(store: &impl PreferenceStore, key: &str) -> Theme {
    let Some(raw) = store.get(key) else {
        return Theme::default();
    };
    match raw.parse() {
        Ok(theme) => theme,
        Err(err) => {
            log::warn!("ignoring stored theme preference: {err}");
            Theme::default()
        }
    }
}

/// Tracks the theme last applied to the page root.
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Apply the stored preference on page load.
    pub fn load(&mut self, store: &impl PreferenceStore, config: &PageConfig) -> Vec<Action> {
        self.current = stored_theme(store, &config.theme_storage_key);
        vec![set_theme_attribute(self.current)]
    }

    /// Flip the theme shown on the page root.
    ///
    /// `displayed` is the root's current `data-theme` attribute. Anything other
    /// than `light` (including no attribute) switches to light.
    pub fn toggle(&mut self, displayed: Option<&str>, config: &PageConfig) -> Vec<Action> {
        let next = match displayed.map(str::parse::<Theme>) {
            Some(Ok(shown)) => shown.toggled(),
            _ => Theme::Light,
        };
        self.current = next;
        log::info!("theme switched to {next}");

        vec![
            set_theme_attribute(next),
            Action::Persist { key: config.theme_storage_key.clone(), value: next.as_str().to_owned() },
            Action::style(Target::Root, "transition", config.theme_transition_css.clone()),
            Action::defer_ms(config.theme_transition_ms, Task::ClearThemeTransition),
        ]
    }

    /// Drop the inline transition so later style changes are not animated.
    #[must_use]
    pub fn clear_transition(&self) -> Vec<Action> {
        vec![Action::style(Target::Root, "transition", "")]
    }
}

fn set_theme_attribute(theme: Theme) -> Action {
    Action::SetAttribute { target: Target::Root, name: THEME_ATTRIBUTE, value: theme.as_str().to_owned() }
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
