//! Guest message panel: blessings list plus a submit form.
//!
//! The list reloads in full on mount, after a successful submit, and on every
//! change-feed event for `guest_messages`.

use leptos::prelude::*;
use wire::Table;
use wire::records::GuestMessage;

use crate::components::submit_status::SubmitBanner;
use crate::content::panels::messages::{EMPTY, ERROR, LOADING, NAME, PLACEHOLDER, SUBMIT, SUCCESS, TITLE};
use crate::state::messages::MessagesState;
use crate::state::site::SiteState;

#[component]
pub fn MessageBoard() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let lang = Signal::derive(move || site.with(SiteState::lang));
    let state = RwSignal::new(MessagesState::new());

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let items = crate::net::api::fetch_messages().await;
            state.update(|s| s.apply_loaded(items));
        });
    };

    reload();
    let feed = crate::net::feed::subscribe(Table::GuestMessages, move |_| reload());
    on_cleanup(move || feed.close());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(body) = state.with_untracked(MessagesState::draft) else {
            return;
        };
        let mut started = None;
        state.update(|s| started = s.submit.begin());
        let Some(seq) = started else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_message(&body).await;
            if let Err(e) = &result {
                leptos::logging::warn!("message submit failed: {e}");
            }
            let ok = result.is_ok();
            state.update(|s| s.finish_submit(seq, ok));
            if ok {
                reload();
            }
            crate::components::submit_status::schedule_status_reset(move || {
                state.update(|s| {
                    s.submit.reset(seq);
                });
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (body, seq);
    };

    let busy = move || state.with(|s| s.submit.is_busy());

    view! {
        <div class="message-board">
            <h2 class="panel__title">{move || TITLE.get(lang.get())}</h2>
            <form class="panel__form" on:submit=on_submit>
                <input
                    class="panel__input"
                    type="text"
                    required=true
                    placeholder=move || NAME.get(lang.get())
                    prop:value=move || state.with(|s| s.name.clone())
                    on:input=move |ev| state.update(|s| s.name = event_target_value(&ev))
                />
                <textarea
                    class="panel__textarea"
                    required=true
                    rows="4"
                    placeholder=move || PLACEHOLDER.get(lang.get())
                    prop:value=move || state.with(|s| s.text.clone())
                    on:input=move |ev| state.update(|s| s.text = event_target_value(&ev))
                ></textarea>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || !state.with(MessagesState::can_submit)
                >
                    {move || if busy() { "…" } else { SUBMIT.get(lang.get()) }}
                </button>
                <SubmitBanner
                    status=Signal::derive(move || state.with(|s| s.submit.status))
                    lang
                    success=SUCCESS
                    error=ERROR
                />
            </form>

            <div class="message-board__list">
                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=move || view! { <p class="panel__hint">{move || LOADING.get(lang.get())}</p> }
                >
                    <Show
                        when=move || state.with(|s| !s.items.is_empty())
                        fallback=move || view! { <p class="panel__hint">{move || EMPTY.get(lang.get())}</p> }
                    >
                        <For
                            each=move || state.with(|s| s.items.clone())
                            key=|m| m.id
                            children=|m: GuestMessage| {
                                view! {
                                    <article class="message-card">
                                        <p class="message-card__text">{m.message}</p>
                                        <footer class="message-card__meta">
                                            <span class="message-card__name">{m.name}</span>
                                            <time class="message-card__date">{wire::display_date(m.created_at)}</time>
                                        </footer>
                                    </article>
                                }
                            }
                        />
                    </Show>
                </Show>
            </div>
        </div>
    }
}
