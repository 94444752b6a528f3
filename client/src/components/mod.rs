//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the invitation sections and guest panels. Language and
//! navigation come from the `RwSignal<SiteState>` context; each guest panel
//! keeps its own state signal.

pub mod audio_player;
pub mod contact;
pub mod couple;
pub mod hero;
pub mod language_selector;
pub mod language_toggle;
pub mod loading_screen;
pub mod message_board;
pub mod modal;
pub mod nav_bar;
pub mod our_gallery;
pub mod photo_share;
pub mod rsvp_form;
pub mod scroll_top;
pub mod story;
pub mod submit_status;
pub mod sumuhurtham;
pub mod venue;
