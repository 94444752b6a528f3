//! RSVP submissions. Write-only from the guest's side.
//!
//! Guest count, requirements, and the guest-room flag are stored exactly as
//! submitted even when `attending` is false. The form hides those fields for
//! declines without clearing them, so a decline can carry stale values;
//! readers of the `rsvps` table should ignore them when `attending` is false.

use tracing::info;
use uuid::Uuid;
use wire::{ChangeOp, NewRsvp, RsvpResponse, Table};

use crate::state::{AppState, now_ms};
use crate::store::StoreError;

pub const MAX_ADDITIONAL_GUESTS: u32 = 50;

#[derive(Debug, thiserror::Error)]
pub enum RsvpError {
    #[error("name is required")]
    MissingName,
    #[error("location is required")]
    MissingLocation,
    #[error("at most {max} additional guests")]
    TooManyGuests { max: u32 },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Store one RSVP response.
///
/// # Errors
///
/// Returns a validation error for a blank name or location, or an implausible
/// guest count on an acceptance, or [`RsvpError::Store`] if the insert fails.
pub async fn submit_rsvp(state: &AppState, new: NewRsvp) -> Result<RsvpResponse, RsvpError> {
    let name = new.name.trim();
    let location = new.location.trim();
    if name.is_empty() {
        return Err(RsvpError::MissingName);
    }
    if location.is_empty() {
        return Err(RsvpError::MissingLocation);
    }
    if new.attending && new.additional_guests > MAX_ADDITIONAL_GUESTS {
        return Err(RsvpError::TooManyGuests { max: MAX_ADDITIONAL_GUESTS });
    }

    let row = RsvpResponse {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        side: new.side,
        location: location.to_owned(),
        attending: new.attending,
        additional_guests: new.additional_guests,
        requirements: new.requirements,
        guest_room_required: new.guest_room_required,
        created_at: now_ms(),
    };
    state.records.insert_rsvp(&row).await?;
    info!(id = %row.id, attending = row.attending, side = row.side.as_str(), "rsvp stored");

    state.feed.publish(Table::Rsvps, ChangeOp::Insert, Some(row.id));
    Ok(row)
}

#[cfg(test)]
#[path = "rsvp_test.rs"]
mod tests;
