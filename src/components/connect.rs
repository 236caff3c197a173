//! Connect section: contact email and the ELSEWHERE social grid.

use leptos::prelude::*;

use crate::components::icons::ArrowRightIcon;
use crate::content;
use crate::state::sections::SectionId;
use crate::state::ui::UiState;

/// Closing section with the contact email and external profile cards.
#[component]
pub fn ConnectSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let revealed = move || ui.get().is_revealed(SectionId::Connect);

    let socials = content::SOCIALS
        .iter()
        .map(|social| {
            view! {
                <a
                    class="connect__card"
                    href=social.url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <span class="connect__card-name">{social.name}</span>
                    <span class="connect__card-handle">{social.handle}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="connect" class="section connect" class:section--revealed=revealed>
            <div class="connect__grid">
                <div class="connect__main">
                    <h2 class="section__title">"Let's Connect"</h2>
                    <p class="connect__blurb">
                        "Always interested in new opportunities, collaborations, and \
                         conversations about technology and design."
                    </p>
                    <a class="connect__email" href=format!("mailto:{}", content::EMAIL)>
                        <span>{content::EMAIL}</span>
                        <ArrowRightIcon/>
                    </a>
                </div>

                <div class="connect__aside">
                    <div class="connect__label">"ELSEWHERE"</div>
                    <div class="connect__cards">{socials}</div>
                </div>
            </div>
        </section>
    }
}
