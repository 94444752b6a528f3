//! RSVP panel. Write-only: nothing is listed back.

use leptos::prelude::*;
use wire::records::Side;

use crate::components::submit_status::SubmitBanner;
use crate::content::panels::rsvp::{
    ATTENDING, BRIDE, ERROR, GROOM, GUEST_ROOM, GUESTS, INTRO, LOCATION, NAME, NO, REQUIREMENTS, SIDE, SUBMIT,
    SUBMITTING, SUCCESS, TITLE, YES,
};
use crate::state::rsvp::RsvpForm;
use crate::state::site::SiteState;

#[component]
pub fn RsvpPanel() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let lang = Signal::derive(move || site.with(SiteState::lang));
    let form = RwSignal::new(RsvpForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.with_untracked(RsvpForm::can_submit) {
            return;
        }
        let body = form.with_untracked(RsvpForm::to_request);
        let mut started = None;
        form.update(|f| started = f.submit.begin());
        let Some(seq) = started else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_rsvp(&body).await;
            if let Err(e) = &result {
                leptos::logging::warn!("rsvp submit failed: {e}");
            }
            form.update(|f| f.finish_submit(seq, result.is_ok()));
            crate::components::submit_status::schedule_status_reset(move || {
                form.update(|f| {
                    f.submit.reset(seq);
                });
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (body, seq);
    };

    let side_option = move |side: Side, label: crate::i18n::Tr| {
        view! {
            <label class="panel__choice">
                <input
                    type="radio"
                    name="rsvp-side"
                    value=side.as_str()
                    prop:checked=move || form.with(|f| f.side == side)
                    on:change=move |_| form.update(|f| f.side = side)
                />
                {move || label.get(lang.get())}
            </label>
        }
    };

    let attending_option = move |attending: bool, label: crate::i18n::Tr| {
        view! {
            <label class="panel__choice">
                <input
                    type="radio"
                    name="rsvp-attending"
                    prop:checked=move || form.with(|f| f.attending == attending)
                    on:change=move |_| form.update(|f| f.attending = attending)
                />
                {move || label.get(lang.get())}
            </label>
        }
    };

    view! {
        <div class="rsvp">
            <h2 class="panel__title">{move || TITLE.get(lang.get())}</h2>
            <p class="panel__hint">{move || INTRO.get(lang.get())}</p>
            <form class="panel__form" on:submit=on_submit>
                <input
                    class="panel__input"
                    type="text"
                    required=true
                    placeholder=move || NAME.get(lang.get())
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <fieldset class="panel__fieldset">
                    <legend>{move || SIDE.get(lang.get())}</legend>
                    {side_option(Side::Bride, BRIDE)}
                    {side_option(Side::Groom, GROOM)}
                </fieldset>
                <input
                    class="panel__input"
                    type="text"
                    required=true
                    placeholder=move || LOCATION.get(lang.get())
                    prop:value=move || form.with(|f| f.location.clone())
                    on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                />
                <fieldset class="panel__fieldset">
                    <legend>{move || ATTENDING.get(lang.get())}</legend>
                    {attending_option(true, YES)}
                    {attending_option(false, NO)}
                </fieldset>

                <Show when=move || form.with(RsvpForm::show_attending_fields)>
                    <label class="panel__label">
                        {move || GUESTS.get(lang.get())}
                        <input
                            class="panel__input"
                            type="number"
                            min="0"
                            prop:value=move || form.with(|f| f.additional_guests.to_string())
                            on:input=move |ev| form.update(|f| f.set_guests(&event_target_value(&ev)))
                        />
                    </label>
                    <textarea
                        class="panel__textarea"
                        rows="3"
                        placeholder=move || REQUIREMENTS.get(lang.get())
                        prop:value=move || form.with(|f| f.requirements.clone())
                        on:input=move |ev| form.update(|f| f.requirements = event_target_value(&ev))
                    ></textarea>
                    <label class="panel__choice">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.guest_room)
                            on:change=move |ev| form.update(|f| f.guest_room = event_target_checked(&ev))
                        />
                        {move || GUEST_ROOM.get(lang.get())}
                    </label>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || !form.with(RsvpForm::can_submit)>
                    {move || {
                        if form.with(|f| f.submit.is_busy()) { SUBMITTING.get(lang.get()) } else { SUBMIT.get(lang.get()) }
                    }}
                </button>
                <SubmitBanner
                    status=Signal::derive(move || form.with(|f| f.submit.status))
                    lang
                    success=SUCCESS
                    error=ERROR
                />
            </form>
        </div>
    }
}
