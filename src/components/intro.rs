//! Intro section: name, tagline, profile links, portrait, and status blocks.

use leptos::prelude::*;

use crate::components::icons::{DownloadIcon, GitHubIcon, LinkedInIcon};
use crate::content;
use crate::state::sections::SectionId;
use crate::state::ui::UiState;

/// Full-height intro header with the name heading, tagline, profile link
/// cards, resume download, portrait, and CURRENTLY/FOCUS blocks.
#[component]
pub fn IntroSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let revealed = move || ui.get().is_revealed(SectionId::Intro);

    let link_cards = content::INTRO_LINKS
        .iter()
        .map(|link| {
            let icon = match link.name {
                "LinkedIn" => view! { <LinkedInIcon/> }.into_any(),
                _ => view! { <GitHubIcon/> }.into_any(),
            };
            view! {
                <a
                    class="intro__card"
                    href=link.url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <span class="intro__card-name">{icon} {link.name}</span>
                    <span class="intro__card-handle">{link.handle}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    let focus_rows = content::FOCUS_ROWS
        .iter()
        .map(|row| {
            let chips = row
                .iter()
                .map(|tag| view! { <span class="chip">{*tag}</span> })
                .collect::<Vec<_>>();
            view! { <div class="intro__focus-row">{chips}</div> }
        })
        .collect::<Vec<_>>();

    view! {
        <header id="intro" class="section intro" class:section--revealed=revealed>
            <div class="intro__grid">
                <div class="intro__main">
                    <div class="intro__kicker">{content::KICKER}</div>
                    <h1 class="intro__name">
                        {content::FIRST_NAME}
                        <br/>
                        <span class="intro__name-muted">{content::LAST_NAME}</span>
                    </h1>

                    <p class="intro__tagline">
                        "Engineer of intuitive digital products shaped by "
                        <span class="intro__tagline-accent">"design"</span>
                        ", "
                        <span class="intro__tagline-accent">"code"</span>
                        ", and "
                        <span class="intro__tagline-accent">"user experience"</span>
                        "."
                    </p>

                    <div class="intro__links">
                        <div class="intro__cards">{link_cards}</div>
                        <a
                            class="intro__resume"
                            href=content::RESUME_URL
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <DownloadIcon/>
                            <span>"Download Resume"</span>
                        </a>
                    </div>
                </div>

                <div class="intro__aside">
                    <div class="intro__portrait-frame">
                        <img
                            class="intro__portrait"
                            src="/assets/portrait.svg"
                            alt="Gaurav Gupta - Software Engineer"
                        />
                    </div>

                    <div class="intro__block">
                        <div class="intro__block-label">"CURRENTLY"</div>
                        <div class="intro__block-title">{content::EDUCATION.program}</div>
                        <div class="intro__block-sub">{content::EDUCATION.school}</div>
                        <div class="intro__block-period">{content::EDUCATION.period}</div>
                    </div>

                    <div class="intro__block">
                        <div class="intro__block-label">"FOCUS"</div>
                        {focus_rows}
                    </div>
                </div>
            </div>
        </header>
    }
}
