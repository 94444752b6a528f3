//! Full-screen language choice shown until a language is picked.

use leptos::prelude::*;

use crate::content::{BLESSINGS, CHOOSE_LANGUAGE, INVOCATION, SUBHALEKHA, WELCOME};
use crate::i18n::Language;
use crate::state::site::SiteState;

#[component]
pub fn LanguageSelector() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();

    let choose = move |lang: Language| site.update(|s| s.choose_language(lang));

    view! {
        <div class="language-selector">
            <p class="language-selector__invocation">{INVOCATION}</p>
            <div class="language-selector__blessings">
                {BLESSINGS.iter().map(|b| view! { <span>{*b}</span> }).collect_view()}
            </div>
            <h1 class="language-selector__title">{SUBHALEKHA}</h1>
            <p class="language-selector__welcome">
                {WELCOME.en}
                " / "
                {WELCOME.te}
            </p>
            <p class="language-selector__prompt">{CHOOSE_LANGUAGE}</p>
            <div class="language-selector__buttons">
                <button class="btn btn--primary" on:click=move |_| choose(Language::English)>
                    {Language::English.native_name()}
                </button>
                <button class="btn btn--primary" on:click=move |_| choose(Language::Telugu)>
                    {Language::Telugu.native_name()}
                </button>
            </div>
        </div>
    }
}
