//! Shared record types and change-feed codec for the invitation site.
//!
//! This crate owns the JSON shapes exchanged between `server` and `client`:
//! guest records served over REST, and the change events pushed over the
//! websocket feed. Change events are deliberately payload-free; subscribers
//! only learn that a table changed and reload it in full.

pub mod records;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use records::*;

/// Error returned by [`decode_event`] and [`Table::from_str`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text could not be decoded as a JSON change event.
    #[error("failed to decode change event: {0}")]
    Decode(#[from] serde_json::Error),
    /// The table name is not one the feed knows about.
    #[error("unknown table: {0}")]
    UnknownTable(String),
}

// =============================================================================
// TABLES
// =============================================================================

/// Tables that can be observed through the change feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    GuestMessages,
    GuestPhotos,
    Rsvps,
    GalleryPhotos,
    ProfileImages,
}

impl Table {
    pub const ALL: [Table; 5] =
        [Self::GuestMessages, Self::GuestPhotos, Self::Rsvps, Self::GalleryPhotos, Self::ProfileImages];

    /// Table name as stored in Postgres and used in `?table=` queries.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GuestMessages => "guest_messages",
            Self::GuestPhotos => "guest_photos",
            Self::Rsvps => "rsvps",
            Self::GalleryPhotos => "gallery_photos",
            Self::ProfileImages => "profile_images",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Table {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CodecError::UnknownTable(s.to_owned()))
    }
}

// =============================================================================
// CHANGE EVENTS
// =============================================================================

/// Kind of change observed on a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeOp {
    Insert,
    Update,
    Delete,
    /// Synthetic event: the subscriber missed events and should reload.
    Refresh,
}

/// A single notification on the change feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub table: Table,
    pub op: ChangeOp,
    /// Row that changed, when known.
    pub id: Option<Uuid>,
    /// Milliseconds since the Unix epoch when the change was published.
    pub ts: i64,
}

impl ChangeEvent {
    #[must_use]
    pub fn new(table: Table, op: ChangeOp, id: Option<Uuid>, ts: i64) -> Self {
        Self { table, op, id, ts }
    }

    /// Build the synthetic event delivered after a subscriber lagged.
    #[must_use]
    pub fn refresh(table: Table, ts: i64) -> Self {
        Self::new(table, ChangeOp::Refresh, None, ts)
    }
}

/// Encode a change event as JSON text for a websocket text frame.
#[must_use]
pub fn encode_event(event: &ChangeEvent) -> String {
    // Every field is a plain enum, option, or integer; serialization cannot fail.
    serde_json::to_string(event).unwrap_or_default()
}

/// Decode a change event from websocket text.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] if the text is not a valid change event.
pub fn decode_event(text: &str) -> Result<ChangeEvent, CodecError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
