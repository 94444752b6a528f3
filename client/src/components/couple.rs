//! Bride and groom profiles.

use leptos::prelude::*;
use wire::records::CoupleImages;

use crate::content::{BRIDE, GROOM, Profile};
use crate::i18n::Language;
use crate::state::site::{Section, SiteState};

#[component]
pub fn Couple() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let lang = Signal::derive(move || site.with(SiteState::lang));
    let images = RwSignal::new(CoupleImages::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(found) = crate::net::api::fetch_profiles().await {
            images.set(found);
        }
    });

    let bride_image = Signal::derive(move || images.with(|i| i.bride.clone()));
    let groom_image = Signal::derive(move || images.with(|i| i.groom.clone()));

    view! {
        <section id=Section::Couple.id() class="couple">
            <h2 class="section-title">{move || Section::Couple.label().get(lang.get())}</h2>
            <div class="couple__cards">
                <ProfileCard profile=BRIDE image=bride_image lang/>
                <span class="couple__heart">"❤"</span>
                <ProfileCard profile=GROOM image=groom_image lang/>
            </div>
        </section>
    }
}

#[component]
fn ProfileCard(profile: Profile, image: Signal<String>, lang: Signal<Language>) -> impl IntoView {
    view! {
        <div class="profile-card">
            <Show
                when=move || !image.get().is_empty()
                fallback=|| view! { <div class="profile-card__image profile-card__image--empty"></div> }
            >
                <img class="profile-card__image" src=move || image.get() alt=move || profile.name.get(lang.get())/>
            </Show>
            <h3 class="profile-card__name">{move || profile.name.get(lang.get())}</h3>
            <p class="profile-card__parents">{move || profile.parents.get(lang.get())}</p>
            <p class="profile-card__bio">{move || profile.bio.get(lang.get())}</p>
        </div>
    }
}
