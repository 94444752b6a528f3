//! Sumuhurtham section with its own audio clip.

use leptos::prelude::*;

use crate::content::{SUMUHURTHAM_AUDIO, SUMUHURTHAM_CAPTION, SUMUHURTHAM_INTRO, SUMUHURTHAM_TITLE};
use crate::state::audio::PlayerState;
use crate::state::site::{Section, SiteState};

#[component]
pub fn Sumuhurtham() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let lang = move || site.with(SiteState::lang);
    let player = RwSignal::new(PlayerState::default());
    let audio_ref = NodeRef::<leptos::html::Audio>::new();

    let on_toggle = move |_| {
        let mut playing = false;
        player.update(|p| playing = p.toggle_play());
        #[cfg(feature = "hydrate")]
        if let Some(audio) = audio_ref.get() {
            if playing {
                if audio.play().is_err() {
                    leptos::logging::warn!("sumuhurtham audio refused to play");
                    player.update(PlayerState::ended);
                }
            } else {
                let _ = audio.pause();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (playing, audio_ref);
    };

    let on_mute = move |_| {
        let mut muted = false;
        player.update(|p| muted = p.toggle_mute());
        #[cfg(feature = "hydrate")]
        if let Some(audio) = audio_ref.get() {
            audio.set_muted(muted);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = muted;
    };

    view! {
        <section id=Section::Sumuhurtham.id() class="sumuhurtham">
            <h2 class="section-title">{move || SUMUHURTHAM_TITLE.get(lang())}</h2>
            <p class="sumuhurtham__intro">{move || SUMUHURTHAM_INTRO.get(lang())}</p>
            <audio node_ref=audio_ref src=SUMUHURTHAM_AUDIO preload="none" on:ended=move |_| player.update(PlayerState::ended)></audio>
            <div class="sumuhurtham__controls">
                <span class="sumuhurtham__caption">{move || SUMUHURTHAM_CAPTION.get(lang())}</span>
                <button class="btn" on:click=on_toggle>
                    {move || if player.with(|p| p.playing) { "❚❚" } else { "▶" }}
                </button>
                <button class="btn" on:click=on_mute>
                    {move || if player.with(|p| p.muted) { "🔇" } else { "🔊" }}
                </button>
            </div>
        </section>
    }
}
