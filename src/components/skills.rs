//! Skills section: proficiency groups in a bordered grid.

use leptos::prelude::*;

use crate::content;
use crate::state::sections::SectionId;
use crate::state::ui::UiState;

/// Proficiencies grid, one bordered box per skill group.
#[component]
pub fn SkillsSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let revealed = move || ui.get().is_revealed(SectionId::Skills);

    let groups = content::SKILL_GROUPS
        .iter()
        .map(|group| {
            let skills = group
                .skills
                .iter()
                .map(|skill| view! { <div class="skills__item">{*skill}</div> })
                .collect::<Vec<_>>();
            view! {
                <div class="skills__group">
                    <div class="skills__group-title">{group.title}</div>
                    <div class="skills__group-grid">{skills}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="skills" class="section skills" class:section--revealed=revealed>
            <div class="section__header">
                <h2 class="section__title">"Proficiencies"</h2>
            </div>
            <div class="skills__grid">{groups}</div>
        </section>
    }
}
