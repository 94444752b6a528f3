//! Record storage for guest submissions and curated content.
//!
//! DESIGN
//! ======
//! Services talk to a [`Records`] trait object instead of a `PgPool` so the
//! photo saga and feed publishing can be exercised without a live database.
//! `PgRecords` is the production implementation; `MemoryRecords` backs tests
//! and can be told to fail specific inserts.
//!
//! Reads return rows in display order. Filtering that belongs to a view (the
//! approved-only curated gallery) is done in the query, not by callers.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use std::collections::HashSet;

use serde_json::Value;
use uuid::Uuid;
use wire::{GuestMessage, ProfileImage, RsvpResponse};

pub use postgres::PgRecords;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("invalid stored value: {0}")]
    Invalid(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// ROWS
// =============================================================================

/// `guest_photos` row. The public URL is derived by the photo service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoRow {
    pub id: Uuid,
    pub photo_url: String,
    pub caption: Option<String>,
    pub uploaded_by: Option<String>,
    pub approved: bool,
    pub created_at: i64,
}

/// `gallery_photos` row with its caption still in stored JSON form.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryRow {
    pub id: Uuid,
    pub photo_url: String,
    pub caption: Value,
    pub approved: bool,
    pub created_at: i64,
}

// =============================================================================
// RECORDS TRAIT
// =============================================================================

#[async_trait::async_trait]
pub trait Records: Send + Sync {
    /// All guest messages, newest first.
    async fn list_messages(&self) -> Result<Vec<GuestMessage>, StoreError>;

    async fn insert_message(&self, row: &GuestMessage) -> Result<(), StoreError>;

    /// All guest photos regardless of approval, newest first.
    async fn list_photos(&self) -> Result<Vec<PhotoRow>, StoreError>;

    async fn insert_photo(&self, row: &PhotoRow) -> Result<(), StoreError>;

    /// Every object name referenced by a `guest_photos` row.
    async fn photo_paths(&self) -> Result<HashSet<String>, StoreError>;

    async fn insert_rsvp(&self, row: &RsvpResponse) -> Result<(), StoreError>;

    /// Approved curated gallery photos, oldest first.
    async fn list_gallery(&self) -> Result<Vec<GalleryRow>, StoreError>;

    async fn list_profile_images(&self) -> Result<Vec<ProfileImage>, StoreError>;
}
