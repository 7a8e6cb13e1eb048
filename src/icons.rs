//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage the widget's glyphs,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    /// Trigger-field affordance hinting that the field opens a list
    pub dropdown_arrow: &'static str,
    /// Marker shown next to the currently selected item in the list
    pub selected_marker: &'static str,
    /// Search bar title glyph
    pub search: &'static str,
    /// Cancel button glyph
    pub cancel: &'static str,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                dropdown_arrow: "🔽",
                selected_marker: "✅",
                search: "🔍",
                cancel: "❌",
            },
            IconTheme::Unicode => IconSet {
                dropdown_arrow: "▼",
                selected_marker: "✓",
                search: "⌕",
                cancel: "✗",
            },
            IconTheme::Ascii => IconSet {
                dropdown_arrow: "v",
                selected_marker: "*",
                search: "/",
                cancel: "x",
            },
        }
    }

    /// Trigger-field dropdown arrow for the current theme
    #[must_use]
    pub fn dropdown_arrow(&self) -> &'static str {
        self.icons().dropdown_arrow
    }

    /// Current-selection marker for the current theme
    #[must_use]
    pub fn selected_marker(&self) -> &'static str {
        self.icons().selected_marker
    }

    /// Search bar glyph for the current theme
    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().search
    }

    /// Cancel button glyph for the current theme
    #[must_use]
    pub fn cancel(&self) -> &'static str {
        self.icons().cancel
    }
}
