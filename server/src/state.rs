//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. Record
//! and object storage sit behind trait objects so services can be driven by
//! in-memory doubles in tests; the change feed and rate limiter are cheap
//! clones around shared inner state.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::SiteConfig;
use crate::feed::ChangeFeed;
use crate::rate_limit::RateLimiter;
use crate::storage::ObjectStore;
use crate::store::Records;

/// Current time as milliseconds since Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub records: Arc<dyn Records>,
    pub objects: Arc<dyn ObjectStore>,
    pub feed: ChangeFeed,
    /// In-memory rate limiter for guest submissions.
    pub rate_limiter: RateLimiter,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(records: Arc<dyn Records>, objects: Arc<dyn ObjectStore>, config: SiteConfig) -> Self {
        Self {
            records,
            objects,
            feed: ChangeFeed::new(),
            rate_limiter: RateLimiter::new(),
            config: Arc::new(config),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
