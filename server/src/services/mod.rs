//! Domain services used by the HTTP and websocket routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation, persistence, and change publishing so route
//! handlers can stay focused on protocol translation. Every write that lands
//! publishes exactly one event on the change feed.

pub mod gallery;
pub mod messages;
pub mod orphans;
pub mod photos;
pub mod rsvp;
