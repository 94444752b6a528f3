//! Overlay frame for the guest panels.

use leptos::prelude::*;

use crate::content::BACK;
use crate::state::site::SiteState;

/// Backdrop plus dialog. Clicking the backdrop, pressing Escape, or the Back
/// button all close it.
#[component]
pub fn Modal(children: Children) -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    let close = move || site.update(SiteState::close_modal);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    // Focus the dialog so Escape reaches it.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        if let Some(el) = dialog_ref.get() {
            let _ = el.focus();
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--panel"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <button class="btn dialog__back" on:click=move |_| close()>
                    "← "
                    {move || BACK.get(site.with(SiteState::lang))}
                </button>
                {children()}
            </div>
        </div>
    }
}
