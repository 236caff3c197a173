//! Root application component with context providers and document meta.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::ui::UiState;
use crate::util;

/// Root application component.
///
/// Provides the shared [`UiState`] context, keeps the document-root theme
/// attribute in sync with the theme flag, and renders the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Mirror the theme flag onto `<html data-theme="...">`.
    Effect::new(move || util::theme::apply(ui.get().theme));

    view! {
        <Title text="Gaurav Gupta"/>
        <Meta name="description" content="Personal portfolio of Gaurav Gupta: skills, work history, and featured projects."/>

        <HomePage/>
    }
}
