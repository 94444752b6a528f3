//! Guest and reference records served by the REST API.
//!
//! Timestamps are milliseconds since the Unix epoch. Every guest-created
//! record starts unapproved; moderation happens out of band.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

// =============================================================================
// MESSAGES
// =============================================================================

/// A blessing left on the message board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestMessage {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub approved: bool,
    pub created_at: i64,
}

/// Body of `POST /api/messages`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub name: String,
    pub message: String,
}

// =============================================================================
// PHOTOS
// =============================================================================

/// A guest-uploaded photo and its stored object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestPhoto {
    pub id: Uuid,
    /// Object name inside the photo store.
    pub path: String,
    /// Public URL the browser loads the image from.
    pub url: String,
    pub caption: Option<String>,
    pub uploaded_by: Option<String>,
    pub approved: bool,
    pub created_at: i64,
}

// =============================================================================
// RSVP
// =============================================================================

/// Which family the guest is attending from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Bride,
    Groom,
}

impl Side {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bride => "bride",
            Self::Groom => "groom",
        }
    }
}

/// Body of `POST /api/rsvps`.
///
/// `additional_guests`, `requirements`, and `guest_room_required` only carry
/// meaning when `attending` is true, but they are sent and stored as entered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRsvp {
    pub name: String,
    pub side: Side,
    pub location: String,
    pub attending: bool,
    pub additional_guests: u32,
    pub requirements: String,
    pub guest_room_required: Option<bool>,
}

/// A stored RSVP.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpResponse {
    pub id: Uuid,
    pub name: String,
    pub side: Side,
    pub location: String,
    pub attending: bool,
    pub additional_guests: u32,
    pub requirements: String,
    pub guest_room_required: Option<bool>,
    pub created_at: i64,
}

// =============================================================================
// CURATED CONTENT
// =============================================================================

/// Text carried in both display languages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub en: String,
    pub te: String,
}

/// A photo from the admin-curated gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryPhoto {
    pub id: Uuid,
    pub photo_url: String,
    pub caption: BilingualText,
    pub approved: bool,
    pub created_at: i64,
}

/// Person a profile image belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    Bride,
    Groom,
}

/// One row of the profile image table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileImage {
    pub person: Person,
    pub image_url: String,
}

/// Profile image URLs for the couple. Empty when no image is configured.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoupleImages {
    pub bride: String,
    pub groom: String,
}

impl CoupleImages {
    /// Fold profile rows into one URL per person. Later rows win.
    #[must_use]
    pub fn from_rows(rows: &[ProfileImage]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, row| {
            match row.person {
                Person::Bride => acc.bride.clone_from(&row.image_url),
                Person::Groom => acc.groom.clone_from(&row.image_url),
            }
            acc
        })
    }
}

/// Public, non-secret settings the browser needs at runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub maps_embed_key: Option<String>,
}

// =============================================================================
// HELPERS
// =============================================================================

/// Render a millisecond timestamp as a short UTC date, e.g. `15 May 2025`.
#[must_use]
pub fn display_date(ms: i64) -> String {
    let nanos = i128::from(ms) * 1_000_000;
    match OffsetDateTime::from_unix_timestamp_nanos(nanos) {
        Ok(dt) => format!("{} {} {}", dt.day(), dt.month(), dt.year()),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;
