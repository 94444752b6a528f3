//! Database pool and embedded migrations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to create the shared SQLx pool and bring the guest
//! tables up to date before the router accepts submissions. Queries live in
//! `store::postgres`; this module only owns connection setup.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::env_parse;

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Connect to Postgres and apply pending migrations.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS))
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;
    tracing::info!("database migrations applied");

    Ok(pool)
}
