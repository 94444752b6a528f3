//! The invitation page.

use leptos::prelude::*;

use crate::components::audio_player::AudioPlayer;
use crate::components::contact::ContactSection;
use crate::components::couple::Couple;
use crate::components::hero::Hero;
use crate::components::language_selector::LanguageSelector;
use crate::components::language_toggle::LanguageToggle;
use crate::components::loading_screen::LoadingScreen;
use crate::components::message_board::MessageBoard;
use crate::components::modal::Modal;
use crate::components::nav_bar::{FloatingButtons, NavBar};
use crate::components::our_gallery::OurGallery;
use crate::components::photo_share::PhotoShare;
use crate::components::rsvp_form::RsvpPanel;
use crate::components::scroll_top::ScrollTop;
use crate::components::story::Story;
use crate::components::sumuhurtham::Sumuhurtham;
use crate::state::site::{Section, SiteState};

#[component]
pub fn HomePage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();

    // Keep <html lang> in step with the chosen language.
    Effect::new(move || {
        let code = site.with(SiteState::lang).code();
        #[cfg(feature = "hydrate")]
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", code);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = code;
    });

    view! {
        <Show when=move || site.with(|s| s.language.is_some()) fallback=LanguageSelector>
            <Show when=move || !site.with(|s| s.splash) fallback=LoadingScreen>
                <Invitation/>
            </Show>
        </Show>
    }
}

#[component]
fn Invitation() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    // Remount the overlay only when the open panel changes.
    let modal = Memo::new(move |_| site.with(|s| s.modal));

    view! {
        <NavBar/>
        <main class="invitation">
            <Hero/>
            <Couple/>
            <Story/>
            <Sumuhurtham/>
            <OurGallery/>
            <ContactSection/>
        </main>
        <FloatingButtons/>
        <LanguageToggle/>
        <AudioPlayer/>
        <ScrollTop/>
        {move || {
            modal.get().map(|panel| view! { <Modal>{panel_view(panel)}</Modal> })
        }}
    }
}

fn panel_view(panel: Section) -> AnyView {
    match panel {
        Section::Messages => view! { <MessageBoard/> }.into_any(),
        Section::PhotoShare => view! { <PhotoShare/> }.into_any(),
        Section::Rsvp => view! { <RsvpPanel/> }.into_any(),
        _ => ().into_any(),
    }
}
