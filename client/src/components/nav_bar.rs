//! Top navigation, mobile menu, and floating panel buttons.

use leptos::prelude::*;

use crate::content::MENU;
use crate::state::site::{NavAction, Section, SiteState};

/// Apply a section selection: update the store, then scroll if needed.
pub fn go_to(site: RwSignal<SiteState>, section: Section) {
    let mut action = NavAction::OpenModal(section);
    site.update(|s| action = s.select_section(section));
    if let NavAction::ScrollTo(id) = action {
        scroll_to(id);
    }
}

fn scroll_to(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            leptos::logging::warn!("no section #{id}");
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn NavBar() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let lang = move || site.with(SiteState::lang);

    view! {
        <nav class="nav-bar">
            <button class="nav-bar__menu-toggle" on:click=move |_| site.update(SiteState::toggle_menu)>
                {move || MENU.get(lang())}
            </button>
            <ul class="nav-bar__links" class:nav-bar__links--open=move || site.with(|s| s.menu_open)>
                {Section::NAV
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <a
                                    href=format!("#{}", section.id())
                                    class="nav-bar__link"
                                    class:nav-bar__link--active=move || site.with(|s| s.active == section)
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        go_to(site, section);
                                    }
                                >
                                    {move || section.label().get(lang())}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Buttons opening the message, photo, and RSVP panels.
#[component]
pub fn FloatingButtons() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();

    view! {
        <div class="floating-buttons">
            {Section::PANELS
                .into_iter()
                .map(|section| {
                    view! {
                        <button
                            class=format!("floating-btn floating-btn--{}", section.id())
                            on:click=move |_| go_to(site, section)
                        >
                            {move || section.label().get(site.with(SiteState::lang))}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
