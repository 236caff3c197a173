//! The single portfolio page: section layout plus observer lifecycle.

use leptos::prelude::*;

use crate::components::connect::ConnectSection;
use crate::components::footer::PageFooter;
use crate::components::intro::IntroSection;
use crate::components::projects::ProjectsSection;
use crate::components::side_nav::SideNav;
use crate::components::skills::SkillsSection;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::work::WorkSection;
use crate::state::ui::UiState;
use crate::util::observer::SectionObserver;

/// Full-page layout for the portfolio.
///
/// Owns the intersection observer that drives section reveals and the
/// scroll-spy highlight: connected once the section elements exist,
/// disconnected on unmount so no callbacks outlive the view.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    // Local storage: the observer owns a JS closure and is not `Send`.
    let observer = StoredValue::new_local(None::<SectionObserver>);

    // Attach the observer after the first render puts the anchors in the
    // document.
    Effect::new(move || {
        if observer.with_value(Option::is_some) {
            return;
        }
        let handle = SectionObserver::connect(move |section| {
            ui.update(|u| u.record_enter(section));
        });
        observer.set_value(handle);
    });

    on_cleanup(move || {
        observer.update_value(|slot| {
            if let Some(obs) = slot.take() {
                obs.disconnect();
            }
        });
    });

    view! {
        <div class="page">
            <SideNav/>
            <ThemeToggle/>

            <main class="page__content">
                <IntroSection/>
                <SkillsSection/>
                <WorkSection/>
                <ProjectsSection/>
                <ConnectSection/>
                <PageFooter/>
            </main>

            <div class="page__fade" aria-hidden="true"></div>
        </div>
    }
}
