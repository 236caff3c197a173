//! Fixed side navigation: one indicator dot per section.

use leptos::prelude::*;

use crate::state::sections::SectionId;
use crate::state::ui::UiState;
use crate::util;

/// Vertical strip of indicator dots, one per section in document order.
///
/// Highlights the active section from `UiState.active_section` and scrolls
/// the matching anchor into view on click.
#[component]
pub fn SideNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let dots = SectionId::ALL
        .iter()
        .map(|&section| {
            let is_active = move || ui.get().active_section == Some(section);
            let on_click = move |_| util::scroll::to_section(section);

            view! {
                <button
                    class="side-nav__dot"
                    class:side-nav__dot--active=is_active
                    title=section.label()
                    aria-label=format!("Navigate to {}", section.anchor())
                    on:click=on_click
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! { <nav class="side-nav">{dots}</nav> }
}
