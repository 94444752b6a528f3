//! Guest message panel state.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use wire::records::{GuestMessage, NewMessage};

use super::submit::SubmitTracker;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessagesState {
    /// Newest first, as served.
    pub items: Vec<GuestMessage>,
    /// True until the first load completes.
    pub loading: bool,
    pub name: String,
    pub text: String,
    pub submit: SubmitTracker,
}

impl MessagesState {
    pub fn new() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Replace the list wholesale. A failed load keeps what was shown.
    pub fn apply_loaded(&mut self, items: Option<Vec<GuestMessage>>) {
        if let Some(items) = items {
            self.items = items;
        }
        self.loading = false;
    }

    /// Request body if both fields are non-blank.
    pub fn draft(&self) -> Option<NewMessage> {
        let name = self.name.trim();
        let message = self.text.trim();
        if name.is_empty() || message.is_empty() {
            return None;
        }
        Some(NewMessage { name: name.to_owned(), message: message.to_owned() })
    }

    pub fn can_submit(&self) -> bool {
        !self.submit.is_busy() && self.draft().is_some()
    }

    /// Outcome of submit `seq`. Success clears the form; failure keeps it.
    pub fn finish_submit(&mut self, seq: u64, ok: bool) {
        if self.submit.finish(seq, ok) && ok {
            self.name.clear();
            self.text.clear();
        }
    }
}
