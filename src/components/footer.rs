//! Page footer.

use leptos::prelude::*;

use crate::content;

/// Copyright footer under the last section.
#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__copyright">{content::COPYRIGHT}</div>
        </footer>
    }
}
