//! Looping background music with a floating play/pause toggle.
//!
//! Browsers block autoplay, so playback starts on the first click anywhere
//! on the page.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::content::BACKGROUND_VOLUME;
use crate::content::{BACKGROUND_AUDIO, PAUSE_MUSIC, PLAY_MUSIC};
use crate::state::audio::PlayerState;
use crate::state::site::SiteState;

#[component]
pub fn AudioPlayer() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let player = RwSignal::new(PlayerState::default());
    let audio_ref = NodeRef::<leptos::html::Audio>::new();

    #[cfg(feature = "hydrate")]
    let apply = move |playing: bool| {
        let Some(audio) = audio_ref.get_untracked() else {
            return;
        };
        if playing {
            audio.set_loop(true);
            audio.set_volume(BACKGROUND_VOLUME);
            if audio.play().is_err() {
                leptos::logging::warn!("background music refused to play");
                player.update(PlayerState::ended);
            }
        } else {
            let _ = audio.pause();
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::click, move |_| {
            let mut start = false;
            player.update(|p| start = p.unlock());
            if start {
                apply(true);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        // Keep the window listener from treating this click as the unlock.
        ev.stop_propagation();
        let mut playing = false;
        player.update(|p| playing = p.toggle_play());
        #[cfg(feature = "hydrate")]
        apply(playing);
        #[cfg(not(feature = "hydrate"))]
        let _ = (playing, audio_ref);
    };

    let label = move || {
        let lang = site.with(SiteState::lang);
        if player.with(|p| p.playing) { PAUSE_MUSIC.get(lang) } else { PLAY_MUSIC.get(lang) }
    };

    view! {
        <audio node_ref=audio_ref src=BACKGROUND_AUDIO preload="auto"></audio>
        <button class="floating-btn floating-btn--music" title=label aria-label=label on:click=on_toggle>
            {move || if player.with(|p| p.playing) { "♫" } else { "♪" }}
        </button>
    }
}
