//! Status line shared by the guest forms.

#[cfg(test)]
#[path = "submit_status_test.rs"]
mod submit_status_test;

use leptos::prelude::*;

use crate::i18n::{Language, Tr};
use crate::state::submit::SubmitStatus;

fn status_class(status: SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Idle => "submit-status submit-status--idle",
        SubmitStatus::Loading => "submit-status submit-status--loading",
        SubmitStatus::Success => "submit-status submit-status--success",
        SubmitStatus::Error => "submit-status submit-status--error",
    }
}

fn status_text(status: SubmitStatus, success: Tr, error: Tr, lang: Language) -> &'static str {
    match status {
        SubmitStatus::Success => success.get(lang),
        SubmitStatus::Error => error.get(lang),
        SubmitStatus::Idle | SubmitStatus::Loading => "",
    }
}

/// Run `reset` once the status banner has been shown long enough.
pub fn schedule_status_reset(reset: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            crate::state::submit::STATUS_RESET_MS,
        )))
        .await;
        reset();
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = reset;
}

#[component]
pub fn SubmitBanner(
    #[prop(into)] status: Signal<SubmitStatus>,
    #[prop(into)] lang: Signal<Language>,
    success: Tr,
    error: Tr,
) -> impl IntoView {
    view! {
        <Show when=move || matches!(status.get(), SubmitStatus::Success | SubmitStatus::Error)>
            <p class=move || status_class(status.get()) role="status">
                {move || status_text(status.get(), success, error, lang.get())}
            </p>
        </Show>
    }
}
