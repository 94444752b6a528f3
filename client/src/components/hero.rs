//! Opening section with the couple's names and a live countdown.

use leptos::prelude::*;

use crate::content::countdown::{self, Countdown, WEDDING_AT_MS};
use crate::content::{HERO_DATE, HERO_INVITE, HERO_TAGLINE, HERO_TITLE};
use crate::state::site::{Section, SiteState};

#[component]
pub fn Hero() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let lang = move || site.with(SiteState::lang);
    let now = RwSignal::new(countdown::now_ms());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                now.set(countdown::now_ms());
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let remaining = move || Countdown::remaining(WEDDING_AT_MS, now.get());

    view! {
        <section id=Section::Home.id() class="hero">
            <h1 class="hero__title">{move || HERO_TITLE.get(lang())}</h1>
            <p class="hero__tagline">{move || HERO_TAGLINE.get(lang())}</p>
            <p class="hero__invite">{move || HERO_INVITE.get(lang())}</p>
            <p class="hero__date">{move || HERO_DATE.get(lang())}</p>
            <div class="countdown">
                {move || {
                    remaining()
                        .units()
                        .into_iter()
                        .map(|(value, unit)| {
                            view! {
                                <div class="countdown__unit">
                                    <span class="countdown__value">{countdown::pad(value)}</span>
                                    <span class="countdown__label">{unit.get(lang())}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
