//! Venue details, map, and location links.

use leptos::prelude::*;

use crate::content::venue::{
    self, ADDRESS, COPIED, COPY_LOCATION, DATE, DESCRIPTION, DIRECTIONS_URL, GET_DIRECTIONS, NAME, TIME, TITLE,
};
use crate::state::site::SiteState;

#[component]
pub fn Venue() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let lang = move || site.with(SiteState::lang);
    let maps_key = RwSignal::new(None::<String>);
    let copied = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(settings) = crate::net::api::fetch_settings().await {
            maps_key.set(settings.maps_embed_key);
        }
    });

    let embed_url = move || maps_key.with(|k| venue::map_embed_url(k.as_deref()));

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(clipboard) = web_sys::window().and_then(|w| w.navigator().clipboard()) {
                let _ = clipboard.write_text(DIRECTIONS_URL);
                copied.set(true);
                crate::components::submit_status::schedule_status_reset(move || copied.set(false));
            }
        }
    };

    view! {
        <div class="venue">
            <h3 class="venue__title">{move || TITLE.get(lang())}</h3>
            {move || {
                embed_url()
                    .map(|src| {
                        view! {
                            <iframe
                                {..::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                                class="venue__map"
                                src=src
                                referrerpolicy="no-referrer-when-downgrade"
                                allowfullscreen=true
                            ></iframe>
                        }
                    })
            }}
            <div class="venue__card">
                <h4 class="venue__name">{move || NAME.get(lang())}</h4>
                <p class="venue__address">{move || ADDRESS.get(lang())}</p>
                <p class="venue__when">{move || DATE.get(lang())} " · " {move || TIME.get(lang())}</p>
                <p class="venue__description">{move || DESCRIPTION.get(lang())}</p>
                <div class="venue__actions">
                    <a class="btn btn--primary" href=DIRECTIONS_URL target="_blank" rel="noopener noreferrer">
                        {move || GET_DIRECTIONS.get(lang())}
                    </a>
                    <button class="btn" on:click=on_copy>
                        {move || COPY_LOCATION.get(lang())}
                    </button>
                </div>
                <Show when=move || copied.get()>
                    <p class="venue__copied">{move || COPIED.get(lang())}</p>
                </Show>
            </div>
        </div>
    }
}
