//! Guest photo sharing.
//!
//! DESIGN
//! ======
//! Sharing is a two-step saga across two stores that share no transaction:
//!
//! 1. `put` the binary under a freshly generated object name
//! 2. insert the `guest_photos` row referencing that name
//!
//! If step 2 fails, the compensating action removes the object from step 1
//! and the insert error is returned to the caller. A process crash between the
//! two steps still leaves an unreferenced object; `services::orphans` sweeps
//! those when enabled.
//!
//! The guest panel lists every photo, approved or not. Only the curated
//! gallery (`services::gallery`) filters on approval.

use tracing::{error, info};
use uuid::Uuid;
use wire::{ChangeOp, GuestPhoto, Table};

use crate::config::SiteConfig;
use crate::state::{AppState, now_ms};
use crate::storage::{ObjectStoreError, object_name};
use crate::store::{PhotoRow, StoreError};

const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "webp", "heic", "heif"];

#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("a photo file is required")]
    MissingFile,
    #[error("uploader name is required")]
    MissingUploader,
    #[error("not an image: {0}")]
    NotAnImage(String),
    #[error("photo is {size} bytes, limit is {max}")]
    TooLarge { size: usize, max: usize },
    #[error("object storage failed: {0}")]
    Storage(#[from] ObjectStoreError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A photo submission as received from the multipart form.
#[derive(Clone, Debug, Default)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    pub uploaded_by: String,
    pub caption: Option<String>,
}

/// Every guest photo, newest first, with public URLs filled in.
///
/// # Errors
///
/// Returns [`PhotoError::Store`] if the records cannot be read.
pub async fn list_photos(state: &AppState) -> Result<Vec<GuestPhoto>, PhotoError> {
    let rows = state.records.list_photos().await?;
    Ok(rows.into_iter().map(|row| to_guest_photo(&state.config, row)).collect())
}

/// Store a photo and its metadata row, rolling the object back if the row
/// cannot be written.
///
/// # Errors
///
/// Returns a validation error before anything is stored, [`PhotoError::Storage`]
/// if the object cannot be written, or [`PhotoError::Store`] if the row insert
/// fails (after the object has been removed again).
pub async fn share_photo(state: &AppState, upload: PhotoUpload) -> Result<GuestPhoto, PhotoError> {
    validate(&upload, state.config.max_upload_bytes)?;

    let now = now_ms();
    let name = object_name(&upload.file_name, now);
    state.objects.put(&name, &upload.bytes).await?;

    let row = PhotoRow {
        id: Uuid::new_v4(),
        photo_url: name.clone(),
        caption: upload.caption.as_deref().map(str::trim).filter(|c| !c.is_empty()).map(str::to_owned),
        uploaded_by: Some(upload.uploaded_by.trim().to_owned()),
        approved: false,
        created_at: now,
    };

    if let Err(insert_err) = state.records.insert_photo(&row).await {
        error!(object = %name, error = %insert_err, "photo row insert failed, removing stored object");
        if let Err(remove_err) = state.objects.remove(&name).await {
            error!(object = %name, error = %remove_err, "compensating delete failed, object orphaned");
        }
        return Err(insert_err.into());
    }

    info!(id = %row.id, object = %name, bytes = upload.bytes.len(), "photo shared");
    state.feed.publish(Table::GuestPhotos, ChangeOp::Insert, Some(row.id));
    Ok(to_guest_photo(&state.config, row))
}

fn validate(upload: &PhotoUpload, max_bytes: usize) -> Result<(), PhotoError> {
    if upload.bytes.is_empty() {
        return Err(PhotoError::MissingFile);
    }
    if upload.uploaded_by.trim().is_empty() {
        return Err(PhotoError::MissingUploader);
    }
    if upload.bytes.len() > max_bytes {
        return Err(PhotoError::TooLarge { size: upload.bytes.len(), max: max_bytes });
    }
    if !looks_like_image(upload) {
        let shown = upload.content_type.clone().unwrap_or_else(|| upload.file_name.clone());
        return Err(PhotoError::NotAnImage(shown));
    }
    Ok(())
}

/// Trust an explicit content type; otherwise fall back to the file extension.
fn looks_like_image(upload: &PhotoUpload) -> bool {
    match upload.content_type.as_deref().map(str::trim).filter(|ct| !ct.is_empty()) {
        Some(ct) if ct != "application/octet-stream" => ct.starts_with("image/"),
        _ => upload
            .file_name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())),
    }
}

fn to_guest_photo(config: &SiteConfig, row: PhotoRow) -> GuestPhoto {
    let path = row.photo_url.trim_start_matches('/').to_owned();
    GuestPhoto {
        id: row.id,
        url: config.photo_url(&path),
        path,
        caption: row.caption,
        uploaded_by: row.uploaded_by,
        approved: row.approved,
        created_at: row.created_at,
    }
}

#[cfg(test)]
#[path = "photos_test.rs"]
mod tests;
