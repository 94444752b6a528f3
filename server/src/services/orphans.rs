//! Orphaned photo object sweeper.
//!
//! DESIGN
//! ======
//! The photo saga compensates for a failed row insert, but a crash between
//! upload and insert still leaves an object no row references. When enabled
//! (`ORPHAN_SWEEP_SECS` > 0), a background task periodically removes objects
//! that are unreferenced and older than the grace period.
//!
//! The grace period keeps the sweeper away from uploads whose row insert is
//! still in flight. Object age comes from the millisecond prefix of the
//! generated name; objects without one are never touched.

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};
use wire::{ChangeOp, Table};

use crate::state::{AppState, now_ms};
use crate::storage::{ObjectStoreError, object_timestamp};
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Storage(#[from] ObjectStoreError),
}

/// Spawn the sweeper if the config enables it.
#[must_use]
pub fn spawn_orphan_sweeper(state: AppState) -> Option<JoinHandle<()>> {
    let interval = state.config.orphan_sweep_interval?;
    info!(
        interval_secs = interval.as_secs(),
        grace_secs = state.config.orphan_grace.as_secs(),
        "orphan sweeper enabled"
    );

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match sweep_orphans(&state, now_ms()).await {
                Ok(0) => {}
                Ok(count) => info!(count, "orphan sweep removed objects"),
                Err(e) => warn!(error = %e, "orphan sweep failed"),
            }
        }
    }))
}

/// Remove unreferenced objects older than the grace period. Returns how many
/// were removed.
///
/// # Errors
///
/// Returns an error if the referenced paths or stored objects cannot be
/// listed. Individual removal failures are logged and skipped.
pub async fn sweep_orphans(state: &AppState, now: i64) -> Result<usize, SweepError> {
    let grace_ms = i64::try_from(state.config.orphan_grace.as_millis()).unwrap_or(i64::MAX);
    // Read objects before references: an upload finishing in between is then
    // either too young or already referenced.
    let objects = state.objects.list().await?;
    let referenced = state.records.photo_paths().await?;

    let mut removed = 0;
    for name in objects {
        if referenced.contains(&name) {
            continue;
        }
        let Some(uploaded_at) = object_timestamp(&name) else {
            continue;
        };
        if now.saturating_sub(uploaded_at) < grace_ms {
            continue;
        }
        match state.objects.remove(&name).await {
            Ok(()) => removed += 1,
            Err(e) => warn!(object = %name, error = %e, "failed to remove orphan"),
        }
    }

    if removed > 0 {
        state.feed.publish(Table::GuestPhotos, ChangeOp::Delete, None);
    }
    Ok(removed)
}

#[cfg(test)]
#[path = "orphans_test.rs"]
mod tests;
