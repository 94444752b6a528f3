//! Photo sharing panel: upload form plus every shared photo.

use leptos::prelude::*;
use wire::Table;
use wire::records::GuestPhoto;

use crate::components::submit_status::SubmitBanner;
use crate::content::panels::photos::{
    ALT, CAPTION, DESCRIPTION, EMPTY, ERROR, SUCCESS, TITLE, UPLOAD, UPLOADED_BY, UPLOADING,
};
use crate::i18n::Language;
use crate::state::photos::{self, PhotosState};
use crate::state::site::SiteState;

#[component]
pub fn PhotoShare() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let lang = Signal::derive(move || site.with(SiteState::lang));
    let state = RwSignal::new(PhotosState::new());
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let items = crate::net::api::fetch_photos().await;
            state.update(|s| s.apply_loaded(items));
        });
    };

    reload();
    let feed = crate::net::feed::subscribe(Table::GuestPhotos, move |_| reload());
    on_cleanup(move || feed.close());

    let on_file = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let name = file_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            state.update(|s| s.select_file(name));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.with_untracked(PhotosState::can_submit) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                state.update(|s| s.select_file(None));
                return;
            };
            let (uploaded_by, caption) =
                state.with_untracked(|s| (s.uploaded_by.trim().to_owned(), s.caption_field().map(str::to_owned)));
            let mut started = None;
            state.update(|s| started = s.submit.begin());
            let Some(seq) = started else {
                return;
            };

            leptos::task::spawn_local(async move {
                let result = crate::net::api::upload_photo(&file, &uploaded_by, caption.as_deref()).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("photo upload failed: {e}");
                }
                let ok = result.is_ok();
                let mut cleared = false;
                state.update(|s| cleared = s.finish_submit(seq, ok));
                if cleared {
                    if let Some(input) = file_ref.get_untracked() {
                        input.set_value("");
                    }
                }
                if ok {
                    reload();
                }
                crate::components::submit_status::schedule_status_reset(move || {
                    state.update(|s| {
                        s.submit.reset(seq);
                    });
                });
            });
        }
    };

    let busy = move || state.with(|s| s.submit.is_busy());

    view! {
        <div class="photo-share">
            <h2 class="panel__title">{move || TITLE.get(lang.get())}</h2>
            <p class="panel__hint">{move || DESCRIPTION.get(lang.get())}</p>
            <form class="panel__form" on:submit=on_submit>
                <input
                    class="panel__file"
                    type="file"
                    accept="image/*"
                    required=true
                    node_ref=file_ref
                    on:change=on_file
                />
                <input
                    class="panel__input"
                    type="text"
                    required=true
                    placeholder=move || UPLOADED_BY.get(lang.get())
                    prop:value=move || state.with(|s| s.uploaded_by.clone())
                    on:input=move |ev| state.update(|s| s.uploaded_by = event_target_value(&ev))
                />
                <input
                    class="panel__input"
                    type="text"
                    placeholder=move || CAPTION.get(lang.get())
                    prop:value=move || state.with(|s| s.caption.clone())
                    on:input=move |ev| state.update(|s| s.caption = event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || !state.with(PhotosState::can_submit)
                >
                    {move || if busy() { UPLOADING.get(lang.get()) } else { UPLOAD.get(lang.get()) }}
                </button>
                <SubmitBanner
                    status=Signal::derive(move || state.with(|s| s.submit.status))
                    lang
                    success=SUCCESS
                    error=ERROR
                />
            </form>

            <Show
                when=move || state.with(|s| s.loading || !s.items.is_empty())
                fallback=move || view! { <p class="panel__hint">{move || EMPTY.get(lang.get())}</p> }
            >
                <div class="photo-share__grid">
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=|p| p.id
                        children=move |photo: GuestPhoto| view! { <PhotoCard photo state lang/> }
                    />
                </div>
            </Show>
        </div>
    }
}

/// One shared photo. A failed load swaps in a blank placeholder.
#[component]
fn PhotoCard(photo: GuestPhoto, state: RwSignal<PhotosState>, lang: Signal<Language>) -> impl IntoView {
    let id = photo.id;
    let url = StoredValue::new(photo.url);
    let caption = StoredValue::new(photo.caption);
    let uploaded_by = StoredValue::new(photo.uploaded_by);
    let alt = move || caption.get_value().unwrap_or_else(|| ALT.get(lang.get()).to_owned());

    let on_error = move |_| {
        leptos::logging::warn!("shared photo failed to load: {}", url.get_value());
        state.update(|s| {
            s.mark_broken(id);
        });
    };

    view! {
        <figure class="photo-share__item">
            <Show
                when=move || !state.with(|s| s.is_broken(id))
                fallback=|| view! { <div class="photo-share__placeholder"></div> }
            >
                <img src=url.get_value() loading="lazy" alt=alt on:error=on_error/>
            </Show>
            <figcaption>
                {move || {
                    uploaded_by
                        .get_value()
                        .map(|u| view! { <span class="photo-share__by">{photos::credit_line(&u, lang.get())}</span> })
                }}
                {caption.get_value().map(|c| view! { <span class="photo-share__caption">{c}</span> })}
            </figcaption>
        </figure>
    }
}
