//! Story timeline and the list of marriage events.

use leptos::prelude::*;

use crate::content::timeline::{self, EVENTS_TITLE, MARRIAGE_EVENTS, STORY, STORY_TITLE, TimelineEntry};
use crate::i18n::Language;
use crate::state::site::{Section, SiteState};

#[component]
pub fn Story() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let lang = Signal::derive(move || site.with(SiteState::lang));

    view! {
        <section id=Section::Story.id() class="story">
            <h2 class="section-title">{move || STORY_TITLE.get(lang.get())}</h2>
            <Timeline entries={&STORY[..]} lang/>
        </section>
        <section id=Section::Events.id() class="events">
            <h2 class="section-title">{move || EVENTS_TITLE.get(lang.get())}</h2>
            <Timeline entries={&MARRIAGE_EVENTS[..]} lang/>
            <crate::components::venue::Venue/>
        </section>
    }
}

/// Alternating left/right timeline.
#[component]
fn Timeline(entries: &'static [TimelineEntry], lang: Signal<Language>) -> impl IntoView {
    view! {
        <ol class="timeline">
            {entries
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let side = if timeline::is_left(i) { "timeline__item--left" } else { "timeline__item--right" };
                    view! {
                        <li class=format!("timeline__item {side}")>
                            <span class="timeline__date">{move || entry.date.get(lang.get())}</span>
                            <h3 class="timeline__title">{move || entry.title.get(lang.get())}</h3>
                            <p class="timeline__description">{move || entry.description.get(lang.get())}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
