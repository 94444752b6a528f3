//! Client-side application state.
//!
//! ARCHITECTURE
//! ============
//! State structs are plain data with pure transition methods. Components hold
//! them in `RwSignal`s (the site store through context, panel state locally)
//! so every transition is unit-testable without a browser.

pub mod audio;
pub mod messages;
pub mod photos;
pub mod rsvp;
pub mod site;
pub mod submit;
