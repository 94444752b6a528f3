//! Guest support contacts and footer.

use leptos::prelude::*;

use crate::content::{BRIDE_CONTACTS, BRIDE_SIDE, Contact, FOOTER, GROOM_CONTACTS, GROOM_SIDE, SUPPORT_TITLE, tel_href};
use crate::i18n::Tr;
use crate::state::site::{Section, SiteState};

#[component]
pub fn ContactSection() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let lang = move || site.with(SiteState::lang);

    let group = move |title: Tr, contacts: &'static [Contact]| {
        view! {
            <div class="contact__group">
                <h3>{move || title.get(lang())}</h3>
                <ul>
                    {contacts
                        .iter()
                        .map(|c| {
                            view! {
                                <li class="contact__item">
                                    <span class="contact__name">{c.name}</span>
                                    <a class="contact__phone" href=tel_href(c.phone)>{c.phone}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
    };

    view! {
        <section id=Section::Support.id() class="contact">
            <h2 class="section-title">{move || SUPPORT_TITLE.get(lang())}</h2>
            <div class="contact__groups">
                {group(GROOM_SIDE, &GROOM_CONTACTS)}
                {group(BRIDE_SIDE, &BRIDE_CONTACTS)}
            </div>
            <footer class="footer">{FOOTER}</footer>
        </section>
    }
}
