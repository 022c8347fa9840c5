// SPDX-License-Identifier: MPL-2.0
//! In-memory model of the document root element's class list.

use crate::application::port::VisualState;
use crate::domain::Theme;
use std::collections::BTreeSet;

/// Class list of the document root.
///
/// Unrelated classes are left untouched when the theme changes; only the
/// `dark` and `light` markers are managed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootElement {
    classes: BTreeSet<String>,
}

impl RootElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_classes<I, C>(classes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Theme markers currently present, in [`Theme::ALL`] order.
    #[must_use]
    pub fn markers(&self) -> Vec<&'static str> {
        Theme::ALL
            .iter()
            .map(|theme| theme.as_str())
            .filter(|marker| self.has_class(marker))
            .collect()
    }

    /// Renders the `class` attribute value.
    #[must_use]
    pub fn class_attribute(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl VisualState for RootElement {
    fn apply_theme(&mut self, theme: Theme) {
        self.classes.remove(theme.opposite().as_str());
        self.classes.insert(theme.as_str().to_string());
    }

    fn active_theme(&self) -> Option<Theme> {
        match self.markers().as_slice() {
            [marker] => Theme::from_persisted(marker),
            _ => None,
        }
    }
}
