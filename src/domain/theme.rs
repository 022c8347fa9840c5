// SPDX-License-Identifier: MPL-2.0
//! The two-valued UI theme.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UI appearance preference.
///
/// The persisted value and the document marker are always one of the two
/// literals returned by [`Theme::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Both themes, in marker order.
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    /// Returns the literal used both in storage and as the document marker.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Parses a persisted value. Only the exact lowercase literals are
    /// accepted; anything else yields `None`.
    #[must_use]
    pub fn from_persisted(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing user input that names neither theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme '{}' (expected 'dark' or 'light')", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    /// Lenient parse for command-line input: surrounding whitespace and case
    /// are ignored. Persisted values go through [`Theme::from_persisted`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::from_persisted(&s.trim().to_lowercase()).ok_or_else(|| UnknownTheme(s.to_string()))
    }
}
