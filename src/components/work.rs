//! Work section: selected internships and engagements.

use leptos::prelude::*;

use crate::components::icons::ArrowRightIcon;
use crate::content;
use crate::state::sections::SectionId;
use crate::state::ui::UiState;

/// Work history rows: duration, role and company, tech chips, description,
/// and a link to the experience letter.
#[component]
pub fn WorkSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let revealed = move || ui.get().is_revealed(SectionId::Work);

    let rows = content::JOBS
        .iter()
        .map(|job| {
            let tech = job
                .tech
                .iter()
                .map(|tech| view! { <span class="work__tech">{*tech}</span> })
                .collect::<Vec<_>>();
            view! {
                <div class="work__row">
                    <div class="work__meta">
                        <div class="work__duration">{job.duration}</div>
                    </div>
                    <div class="work__body">
                        <h3 class="work__role">{job.role}</h3>
                        <div class="work__company">{job.company}</div>
                        <p class="work__description">{job.description}</p>
                    </div>
                    <div class="work__side">
                        <div class="work__tech-list">{tech}</div>
                        <a
                            class="work__link"
                            href=job.link
                            target="_blank"
                            rel="noopener noreferrer"
                            title="View Experience Letter"
                        >
                            <ArrowRightIcon/>
                        </a>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="work" class="section work" class:section--revealed=revealed>
            <div class="section__header">
                <h2 class="section__title">"Selected Work"</h2>
                <div class="section__meta">{content::WORK_PERIOD}</div>
            </div>
            <div class="work__rows">{rows}</div>
        </section>
    }
}
