// SPDX-License-Identifier: MPL-2.0
//! Theme preference store.
//!
//! [`PreferenceStore`] is the single source of truth for the active [`Theme`].
//! Every change is pushed to two side channels before the call returns:
//!
//! - the persisted value under [`THEME_KEY`] (via [`PreferenceStorage`])
//! - the document marker (via [`VisualState`])
//!
//! # Storage failures
//!
//! Failures of the persistence layer never propagate out of the store. A
//! failed read at start-up keeps the default theme and is reported as a
//! warning key; a failed write is logged and the in-memory and visual state
//! still move to the new theme.
//!
//! # Example
//!
//! ```
//! use license_desk::domain::Theme;
//! use license_desk::infrastructure::{MemoryStorage, RootElement};
//! use license_desk::preferences::PreferenceStore;
//!
//! let (mut store, warning) = PreferenceStore::initialize(MemoryStorage::new(), RootElement::new());
//! assert!(warning.is_none());
//! assert_eq!(store.get(), Theme::Dark);
//!
//! store.toggle();
//! assert_eq!(store.get(), Theme::Light);
//! assert_eq!(store.visual().class_attribute(), "light");
//! ```

mod scope;

pub use scope::PreferenceScope;

use crate::application::port::{PreferenceStorage, VisualState};
use crate::domain::Theme;
use std::fmt;

/// Storage key holding the theme literal.
pub const THEME_KEY: &str = "theme";

/// Warning key returned by [`PreferenceStore::initialize`] when the persisted
/// value could not be read.
pub const WARNING_THEME_READ: &str = "notification-theme-read-error";

// =============================================================================
// PreferenceError
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceError {
    /// The theme was requested from a scope with no store installed.
    NotInitialized,
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceError::NotInitialized => {
                write!(f, "Theme accessed outside an active preference scope")
            }
        }
    }
}

impl std::error::Error for PreferenceError {}

// =============================================================================
// PreferenceStore
// =============================================================================

/// Owns the active theme and keeps storage and the document marker in sync.
#[derive(Debug)]
pub struct PreferenceStore<S, V> {
    theme: Theme,
    storage: S,
    visual: V,
}

impl<S: PreferenceStorage, V: VisualState> PreferenceStore<S, V> {
    /// Builds the store from the persisted value.
    ///
    /// A persisted `"dark"` or `"light"` is adopted; a missing, unreadable or
    /// unrecognised value leaves [`Theme::Dark`] in effect. The resulting theme
    /// is then written back and applied to `visual`, so all three channels
    /// agree once this returns.
    ///
    /// Returns the store and an optional warning key when the read failed.
    pub fn initialize(storage: S, visual: V) -> (Self, Option<String>) {
        let (theme, warning) = match storage.get(THEME_KEY) {
            Ok(Some(raw)) => match Theme::from_persisted(&raw) {
                Some(theme) => (theme, None),
                None => {
                    tracing::debug!(value = %raw, "ignoring unrecognised persisted theme");
                    (Theme::default(), None)
                }
            },
            Ok(None) => (Theme::default(), None),
            Err(err) => {
                tracing::warn!(%err, "failed to read persisted theme; using default");
                (Theme::default(), Some(WARNING_THEME_READ.to_string()))
            }
        };

        let mut store = Self {
            theme,
            storage,
            visual,
        };
        store.apply(theme);
        (store, warning)
    }

    /// Returns the current theme.
    #[must_use]
    pub fn get(&self) -> Theme {
        self.theme
    }

    /// Makes `theme` current in memory, in storage and on the document.
    pub fn set(&mut self, theme: Theme) {
        self.apply(theme);
    }

    /// Switches to the other theme and returns it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.opposite();
        self.apply(next);
        next
    }

    fn apply(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(err) = self.storage.set(THEME_KEY, theme.as_str()) {
            tracing::warn!(%err, theme = %theme, "failed to persist theme");
        }
        self.visual.apply_theme(theme);
    }
}

impl<S, V> PreferenceStore<S, V> {
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn visual(&self) -> &V {
        &self.visual
    }

    /// Tears the store down, handing back its collaborators.
    #[must_use]
    pub fn into_parts(self) -> (S, V) {
        (self.storage, self.visual)
    }
}
