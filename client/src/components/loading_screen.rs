//! Splash shown briefly after the first language choice.

use leptos::prelude::*;

use crate::content::SPLASH_MONOGRAM;
use crate::state::site::SiteState;

pub const SPLASH_MS: u64 = 2000;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(SPLASH_MS)).await;
            site.update(SiteState::dismiss_splash);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = site;

    view! {
        <div class="loading-screen">
            <div class="loading-screen__monogram">{SPLASH_MONOGRAM}</div>
        </div>
    }
}
