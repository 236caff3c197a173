//! Theme application on the document root.
//!
//! Writes the `data-theme` attribute on the `<html>` element so the
//! stylesheet's `:root[data-theme=...]` variables take effect. Requires a
//! browser environment; there is deliberately no persistence, so a reload
//! falls back to the markup default (dark).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;

/// Apply `theme` to the `<html>` element's `data-theme` attribute.
pub fn apply(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.attr_value());
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}
