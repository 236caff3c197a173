//! Projects section: featured project cards.

use leptos::prelude::*;

use crate::components::icons::{ExternalLinkIcon, GitHubIcon};
use crate::content;
use crate::state::sections::SectionId;
use crate::state::ui::UiState;

/// Featured project cards: title, repository and optional live links,
/// description, and tech chips.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let revealed = move || ui.get().is_revealed(SectionId::Projects);

    let cards = content::PROJECTS
        .iter()
        .map(|project| {
            let tech = project
                .tech
                .iter()
                .map(|tech| view! { <span class="chip">{*tech}</span> })
                .collect::<Vec<_>>();

            let live_link = project.live.map(|live| {
                view! {
                    <a
                        class="project-card__action"
                        href=live
                        target="_blank"
                        rel="noopener noreferrer"
                        title="View Live Project"
                    >
                        <ExternalLinkIcon/>
                    </a>
                }
            });

            view! {
                <div class="project-card">
                    <div class="project-card__top">
                        <h3 class="project-card__title">{project.title}</h3>
                        <div class="project-card__actions">
                            <a
                                class="project-card__action"
                                href=project.github
                                target="_blank"
                                rel="noopener noreferrer"
                                title="View on GitHub"
                            >
                                <GitHubIcon/>
                            </a>
                            {live_link}
                        </div>
                    </div>
                    <p class="project-card__description">{project.description}</p>
                    <div class="project-card__tech">{tech}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="projects" class="section projects" class:section--revealed=revealed>
            <div class="section__header">
                <h2 class="section__title">"Featured Projects"</h2>
                <div class="section__meta">{content::PROJECTS_META}</div>
            </div>
            <div class="projects__grid">{cards}</div>
        </section>
    }
}
