//! Curated, read-only content: the approved photo gallery and couple portraits.
//!
//! Both tables are maintained by hand outside the app. Captions are stored as
//! JSON `{"en": …, "te": …}`; older rows hold that object JSON-encoded inside
//! a string, so decoding tries both shapes before giving up.

use serde_json::Value;
use tracing::warn;
use wire::{BilingualText, CoupleImages, GalleryPhoto};

use crate::state::AppState;
use crate::store::{GalleryRow, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Approved gallery photos, oldest first.
///
/// # Errors
///
/// Returns [`GalleryError::Store`] if the records cannot be read.
pub async fn list_gallery(state: &AppState) -> Result<Vec<GalleryPhoto>, GalleryError> {
    let rows = state.records.list_gallery().await?;
    Ok(rows.into_iter().map(to_gallery_photo).collect())
}

/// Portrait URLs for the bride and groom.
///
/// # Errors
///
/// Returns [`GalleryError::Store`] if the records cannot be read.
pub async fn couple_images(state: &AppState) -> Result<CoupleImages, GalleryError> {
    let rows = state.records.list_profile_images().await?;
    Ok(CoupleImages::from_rows(&rows))
}

fn to_gallery_photo(row: GalleryRow) -> GalleryPhoto {
    let caption = parse_caption(&row.caption).unwrap_or_else(|| {
        warn!(id = %row.id, "gallery caption is not bilingual JSON; showing none");
        BilingualText::default()
    });
    GalleryPhoto { id: row.id, photo_url: row.photo_url, caption, approved: row.approved, created_at: row.created_at }
}

/// Decode a stored caption, accepting an object or a JSON-encoded string of one.
fn parse_caption(raw: &Value) -> Option<BilingualText> {
    match raw {
        Value::String(encoded) => serde_json::from_str(encoded).ok(),
        Value::Object(_) => serde_json::from_value(raw.clone()).ok(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "gallery_test.rs"]
mod tests;
