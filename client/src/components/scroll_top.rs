//! Floating "back to top" button, shown once the page is scrolled down.

#[cfg(test)]
#[path = "scroll_top_test.rs"]
mod scroll_top_test;

use leptos::prelude::*;

use crate::content::SCROLL_TOP;
use crate::state::site::SiteState;

/// Scroll offset in pixels past which the button appears.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 400.0;

pub fn past_threshold(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD_PX
}

#[component]
pub fn ScrollTop() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let show = past_threshold(y);
            if visible.get_untracked() != show {
                visible.set(show);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    };

    let label = move || SCROLL_TOP.get(site.with(SiteState::lang));

    view! {
        <Show when=move || visible.get()>
            <button class="floating-btn floating-btn--scroll-top" title=label aria-label=label on:click=on_click>
                "↑"
            </button>
        </Show>
    }
}
