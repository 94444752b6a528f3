//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the guest REST endpoints and the change-feed websocket,
//! and stitches them with Leptos SSR rendering under a single Axum router.
//! Uploaded photos are served read-only from the storage directory and the
//! background music from the music directory.

pub mod feed;
pub mod guest;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Multipart framing overhead allowed on top of the photo size limit, so a
/// slightly oversized photo still reaches the service and gets a clear 413.
const MULTIPART_SLACK_BYTES: usize = 64 * 1024;

/// API routes shared by the SSR app and the API-only fallback.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let body_limit = state.config.max_upload_bytes.saturating_add(MULTIPART_SLACK_BYTES);

    Router::new()
        .route("/api/messages", get(guest::list_messages).post(guest::submit_message))
        .route("/api/photos", get(guest::list_photos).post(guest::share_photo))
        .route("/api/rsvps", post(guest::submit_rsvp))
        .route("/api/gallery", get(guest::list_gallery))
        .route("/api/profiles", get(guest::couple_images))
        .route("/api/settings", get(guest::site_settings))
        .route("/api/feed", get(feed::handle_feed))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(state)
}

/// Stored photos and music, mounted under their public prefixes.
fn static_routes(state: &AppState) -> Router {
    let config = &state.config;
    Router::new()
        .nest_service(&config.public_storage_path, ServeDir::new(&config.storage_dir))
        .nest_service("/music", ServeDir::new(&config.music_dir))
        .layer(CompressionLayer::new())
}

/// API plus static files, without server-side rendering.
pub fn api_only(state: AppState) -> Router {
    let statics = static_routes(&state);
    api_routes(state).merge(statics).layer(TraceLayer::new_for_http())
}

/// Leptos SSR frontend: API routes + the invitation page at `/`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone())
        .layer(CompressionLayer::new());

    // WASM, CSS, and JS built by cargo-leptos.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg = Router::new()
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new());

    let statics = static_routes(&state);
    Ok(api_routes(state)
        .merge(statics)
        .merge(pkg)
        .merge(leptos_router)
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::net::SocketAddr;

    use super::*;

    /// Serve the API-only router on an ephemeral local port.
    pub async fn spawn_api(state: AppState) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = api_only(state);
        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
                .await
                .unwrap();
        });
        addr
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
