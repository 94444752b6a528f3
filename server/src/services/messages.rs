//! Blessings message board.
//!
//! Messages are stored unapproved and listed newest first, approved or not.
//! Names and messages are trimmed before validation and storage.

use tracing::info;
use uuid::Uuid;
use wire::{ChangeOp, GuestMessage, NewMessage, Table};

use crate::state::{AppState, now_ms};
use crate::store::StoreError;

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("name is required")]
    MissingName,
    #[error("message is required")]
    MissingMessage,
    #[error("{field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// All messages, newest first.
///
/// # Errors
///
/// Returns [`MessageError::Store`] if the records cannot be read.
pub async fn list_messages(state: &AppState) -> Result<Vec<GuestMessage>, MessageError> {
    Ok(state.records.list_messages().await?)
}

/// Validate and store a new message, then notify feed subscribers.
///
/// # Errors
///
/// Returns a validation error for blank or oversized fields, or
/// [`MessageError::Store`] if the insert fails.
pub async fn submit_message(state: &AppState, new: NewMessage) -> Result<GuestMessage, MessageError> {
    let name = new.name.trim();
    let message = new.message.trim();
    if name.is_empty() {
        return Err(MessageError::MissingName);
    }
    if message.is_empty() {
        return Err(MessageError::MissingMessage);
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(MessageError::TooLong { field: "name", max: MAX_NAME_CHARS });
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(MessageError::TooLong { field: "message", max: MAX_MESSAGE_CHARS });
    }

    let row = GuestMessage {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        message: message.to_owned(),
        approved: false,
        created_at: now_ms(),
    };
    state.records.insert_message(&row).await?;
    info!(id = %row.id, "message stored");

    state.feed.publish(Table::GuestMessages, ChangeOp::Insert, Some(row.id));
    Ok(row)
}

#[cfg(test)]
#[path = "messages_test.rs"]
mod tests;
