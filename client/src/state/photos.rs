//! Photo sharing panel state.
//!
//! The selected file itself stays in the DOM input; this state only tracks
//! its name so the form can tell whether one is chosen.

#[cfg(test)]
#[path = "photos_test.rs"]
mod photos_test;

use std::collections::HashSet;

use uuid::Uuid;
use wire::records::GuestPhoto;

use super::submit::SubmitTracker;
use crate::content::panels::photos::CREDIT;
use crate::i18n::Language;

/// Caption line naming who shared a photo, e.g. `Uploaded by: Sita`.
pub fn credit_line(uploaded_by: &str, lang: Language) -> String {
    format!("{}: {uploaded_by}", CREDIT.get(lang))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotosState {
    pub items: Vec<GuestPhoto>,
    pub loading: bool,
    pub uploaded_by: String,
    pub caption: String,
    pub file_name: Option<String>,
    pub submit: SubmitTracker,
    /// Photos whose image failed to load; rendered as placeholders.
    pub broken: HashSet<Uuid>,
}

impl PhotosState {
    pub fn new() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn apply_loaded(&mut self, items: Option<Vec<GuestPhoto>>) {
        if let Some(items) = items {
            self.items = items;
        }
        self.loading = false;
    }

    /// Record a failed image load. Returns true the first time for `id`.
    pub fn mark_broken(&mut self, id: Uuid) -> bool {
        self.broken.insert(id)
    }

    pub fn is_broken(&self, id: Uuid) -> bool {
        self.broken.contains(&id)
    }

    pub fn select_file(&mut self, name: Option<String>) {
        self.file_name = name.filter(|n| !n.is_empty());
    }

    pub fn can_submit(&self) -> bool {
        !self.submit.is_busy() && self.file_name.is_some() && !self.uploaded_by.trim().is_empty()
    }

    /// Trimmed caption, or `None` when blank.
    pub fn caption_field(&self) -> Option<&str> {
        Some(self.caption.trim()).filter(|c| !c.is_empty())
    }

    /// Returns true when the form was cleared and the file input should be too.
    pub fn finish_submit(&mut self, seq: u64, ok: bool) -> bool {
        if self.submit.finish(seq, ok) && ok {
            self.uploaded_by.clear();
            self.caption.clear();
            self.file_name = None;
            return true;
        }
        false
    }
}
