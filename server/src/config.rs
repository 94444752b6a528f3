//! Process configuration read from the environment.
//!
//! DESIGN
//! ======
//! Everything except `DATABASE_URL` has a default so a bare `cargo leptos
//! watch` against a local Postgres works. Invalid numeric values fall back to
//! their defaults instead of aborting startup.

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STORAGE_DIR: &str = "data/photos";
const DEFAULT_PUBLIC_STORAGE_PATH: &str = "/storage/photos";
const DEFAULT_MUSIC_DIR: &str = "public/music";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_ORPHAN_SWEEP_SECS: u64 = 0;
const DEFAULT_ORPHAN_GRACE_SECS: u64 = 3600;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Runtime settings for the server process.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub database_url: String,
    pub port: u16,
    /// Directory holding uploaded guest photos.
    pub storage_dir: PathBuf,
    /// URL prefix under which `storage_dir` is served.
    pub public_storage_path: String,
    pub music_dir: PathBuf,
    /// Google Maps embed key handed to the browser; the map is hidden without it.
    pub maps_embed_key: Option<String>,
    pub max_upload_bytes: usize,
    /// Orphan sweep interval. `None` disables the sweeper.
    pub orphan_sweep_interval: Option<Duration>,
    pub orphan_grace: Duration,
}

impl SiteConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if `DATABASE_URL` is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env_opt("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let sweep_secs = env_parse("ORPHAN_SWEEP_SECS", DEFAULT_ORPHAN_SWEEP_SECS);

        Ok(Self {
            database_url,
            port: env_parse("PORT", DEFAULT_PORT),
            storage_dir: env_opt("STORAGE_DIR").map_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR), PathBuf::from),
            public_storage_path: normalize_prefix(
                &env_opt("PUBLIC_STORAGE_PATH").unwrap_or_else(|| DEFAULT_PUBLIC_STORAGE_PATH.to_owned()),
            ),
            music_dir: env_opt("MUSIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_MUSIC_DIR), PathBuf::from),
            maps_embed_key: env_opt("MAPS_EMBED_KEY"),
            max_upload_bytes: env_parse("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            orphan_sweep_interval: (sweep_secs > 0).then(|| Duration::from_secs(sweep_secs)),
            orphan_grace: Duration::from_secs(env_parse("ORPHAN_GRACE_SECS", DEFAULT_ORPHAN_GRACE_SECS)),
        })
    }

    /// Public URL for a stored photo object.
    #[must_use]
    pub fn photo_url(&self, object_name: &str) -> String {
        format!("{}/{}", self.public_storage_path, object_name.trim_start_matches('/'))
    }
}

/// Ensure a URL prefix starts with `/` and has no trailing `/`. The root
/// prefix is reserved for the site itself, so it falls back to the default.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_PUBLIC_STORAGE_PATH.to_owned();
    }
    format!("/{trimmed}")
}

/// Read a non-empty env var.
pub(crate) fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Parse an env var, falling back to `default` when missing or invalid.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
