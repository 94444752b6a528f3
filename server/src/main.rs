#![recursion_limit = "256"]

mod config;
mod db;
mod feed;
mod rate_limit;
mod routes;
mod services;
mod state;
mod storage;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::SiteConfig::from_env().expect("invalid configuration");
    let port = config.port;

    let pool = db::connect(&config.database_url)
        .await
        .expect("database init failed");
    let records = Arc::new(store::PgRecords::new(pool));

    let objects = storage::DiskStore::open(config.storage_dir.clone())
        .await
        .expect("photo storage init failed");
    tracing::info!(dir = %config.storage_dir.display(), prefix = %config.public_storage_path, "photo storage ready");

    if config.maps_embed_key.is_none() {
        tracing::warn!("MAPS_EMBED_KEY not set; venue map shows the link card only");
    }

    let state = state::AppState::new(records, Arc::new(objects), config);

    let _sweeper = services::orphans::spawn_orphan_sweeper(state.clone());

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos SSR unavailable; serving API and static files only");
            routes::api_only(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "kalyanam listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
