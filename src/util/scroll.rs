//! Smooth in-page scrolling to section anchors.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::state::sections::SectionId;

/// Smoothly scroll the document so `section`'s anchor aligns to the
/// viewport top. A missing anchor element degrades to a logged warning.
pub fn to_section(section: SectionId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(el) = doc.get_element_by_id(section.anchor()) else {
            log::warn!("missing section anchor {:?}", section.anchor());
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = section;
    }
}
