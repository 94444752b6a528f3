//! Networking: REST calls and the change feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the JSON/multipart endpoints; `feed` keeps a websocket open to
//! `/api/feed` so panels reload when their table changes.

pub mod api;
pub mod feed;
