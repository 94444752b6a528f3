//! # client
//!
//! Leptos + WASM frontend for the Gayathri Kalyanam invitation site.
//!
//! This crate contains the page shell, content sections, guest panels,
//! session state, and the browser networking used to talk to the server's
//! REST endpoints and change feed. It renders on the server (`ssr`) and
//! hydrates in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod content;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
