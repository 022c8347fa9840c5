// SPDX-License-Identifier: MPL-2.0
//! Document visual-state port.

use crate::domain::Theme;

/// Surface that reflects the active theme, such as the document root element.
///
/// After [`apply_theme`](VisualState::apply_theme) returns, exactly one theme
/// marker is active and it names `theme`.
pub trait VisualState: Send {
    fn apply_theme(&mut self, theme: Theme);

    /// Returns the theme whose marker is currently active, if exactly one is.
    fn active_theme(&self) -> Option<Theme>;
}
