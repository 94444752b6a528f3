//! RSVP form state.
//!
//! Fields that only matter when attending are hidden, not cleared, when the
//! guest switches to "no"; whatever they hold is submitted unchanged.

#[cfg(test)]
#[path = "rsvp_test.rs"]
mod rsvp_test;

use wire::records::{NewRsvp, Side};

use super::submit::SubmitTracker;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsvpForm {
    pub name: String,
    pub side: Side,
    pub location: String,
    pub attending: bool,
    pub additional_guests: u32,
    pub requirements: String,
    pub guest_room: bool,
    pub submit: SubmitTracker,
}

impl Default for RsvpForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            side: Side::Bride,
            location: String::new(),
            attending: true,
            additional_guests: 0,
            requirements: String::new(),
            guest_room: false,
            submit: SubmitTracker::default(),
        }
    }
}

/// Parse the guest-count input. Anything that is not a whole number is 0.
pub fn parse_guests(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

impl RsvpForm {
    pub fn set_guests(&mut self, input: &str) {
        self.additional_guests = parse_guests(input);
    }

    pub fn show_attending_fields(&self) -> bool {
        self.attending
    }

    pub fn can_submit(&self) -> bool {
        !self.submit.is_busy() && !self.name.trim().is_empty() && !self.location.trim().is_empty()
    }

    pub fn to_request(&self) -> NewRsvp {
        NewRsvp {
            name: self.name.trim().to_owned(),
            side: self.side,
            location: self.location.trim().to_owned(),
            attending: self.attending,
            additional_guests: self.additional_guests,
            requirements: self.requirements.clone(),
            guest_room_required: Some(self.guest_room),
        }
    }

    /// Success resets the form to defaults, keeping the submit status.
    pub fn finish_submit(&mut self, seq: u64, ok: bool) {
        if self.submit.finish(seq, ok) && ok {
            let submit = self.submit;
            *self = Self { submit, ..Self::default() };
        }
    }
}
