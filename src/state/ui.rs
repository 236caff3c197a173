//! UI state for the theme, scroll-spy highlight, and section reveals.
//!
//! DESIGN
//! ======
//! One `UiState` instance is owned by the page view and provided via a
//! Leptos context signal at the root. All mutation goes through the
//! methods here; intersection callbacks and click handlers never touch
//! fields directly.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::sections::{RevealSet, SectionId};

/// Color scheme applied to the document root.
///
/// Not persisted: a reload always starts dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The opposite scheme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value written to the `data-theme` attribute on `<html>`.
    #[must_use]
    pub const fn attr_value(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Shared UI state for the single page view.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    /// Section currently highlighted in the side navigation. `None` until
    /// the first intersection callback fires.
    pub active_section: Option<SectionId>,
    /// Sections that have had their one-time fade-in.
    pub revealed: RevealSet,
}

impl UiState {
    /// Handle a section entering the viewport band: mark it revealed and
    /// make it the active navigation target. Within one observer batch the
    /// last entry processed wins the active slot.
    pub fn record_enter(&mut self, section: SectionId) {
        self.revealed.record(section);
        self.active_section = Some(section);
    }

    /// Whether `section` has had its reveal.
    #[must_use]
    pub fn is_revealed(self, section: SectionId) -> bool {
        self.revealed.contains(section)
    }

    /// Flip between dark and light.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}
