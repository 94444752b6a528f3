//! Floating button that swaps the display language.

use leptos::prelude::*;

use crate::state::site::SiteState;

#[component]
pub fn LanguageToggle() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();

    // Label names the language the click switches to.
    let label = move || site.with(|s| s.lang().other().native_name());

    view! {
        <button
            class="floating-btn floating-btn--language"
            title=label
            on:click=move |_| site.update(SiteState::toggle_language)
        >
            {label}
        </button>
    }
}
