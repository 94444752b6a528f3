//! Curated gallery of approved photos.

use std::collections::HashSet;

use leptos::prelude::*;
use uuid::Uuid;
use wire::records::GalleryPhoto;

use crate::content::panels::gallery::{LOADING, TITLE};
use crate::i18n::{self, Language};
use crate::state::site::{Section, SiteState};

#[component]
pub fn OurGallery() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let lang = Signal::derive(move || site.with(SiteState::lang));
    let photos = RwSignal::new(None::<Vec<GalleryPhoto>>);
    let broken = RwSignal::new(HashSet::<Uuid>::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        photos.set(Some(crate::net::api::fetch_gallery().await.unwrap_or_default()));
    });

    view! {
        <section id=Section::OurGallery.id() class="our-gallery">
            <h2 class="section-title">{move || TITLE.get(lang.get())}</h2>
            <Show
                when=move || photos.with(Option::is_some)
                fallback=move || view! { <p>{move || LOADING.get(lang.get())}</p> }
            >
                <div class="our-gallery__grid">
                    <For
                        each=move || photos.get().unwrap_or_default()
                        key=|photo| photo.id
                        children=move |photo| view! { <GalleryItem photo broken lang/> }
                    />
                </div>
            </Show>
        </section>
    }
}

/// One photo. A failed load swaps in a blank placeholder.
#[component]
fn GalleryItem(photo: GalleryPhoto, broken: RwSignal<HashSet<Uuid>>, lang: Signal<Language>) -> impl IntoView {
    let id = photo.id;
    let url = StoredValue::new(photo.photo_url);
    let caption = StoredValue::new(photo.caption);
    let text = move || caption.with_value(|c| i18n::caption(c, lang.get()).to_owned());

    let on_error = move |_| {
        leptos::logging::warn!("gallery image failed to load: {}", url.get_value());
        broken.update(|b| {
            b.insert(id);
        });
    };

    view! {
        <figure class="our-gallery__item">
            <Show
                when=move || broken.with(|b| !b.contains(&id))
                fallback=|| view! { <div class="our-gallery__placeholder"></div> }
            >
                <img src=url.get_value() loading="lazy" alt=text on:error=on_error/>
            </Show>
            <figcaption>{text}</figcaption>
        </figure>
    }
}
