//! Fixed dark/light theme toggle button.

use leptos::prelude::*;

use crate::state::ui::{Theme, UiState};

/// Toggle button flipping the theme flag; the root effect reflects the
/// change onto the document element.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| ui.update(UiState::toggle_theme)
            title="Toggle theme"
            aria-label="Toggle theme"
        >
            {move || if ui.get().theme == Theme::Dark { "☀" } else { "☾" }}
        </button>
    }
}
