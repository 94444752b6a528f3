//! In-memory [`Records`] for tests, with per-table failure injection.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use wire::{GuestMessage, ProfileImage, RsvpResponse};

use super::{GalleryRow, PhotoRow, Records, StoreError};

#[derive(Default)]
struct Tables {
    messages: Vec<GuestMessage>,
    photos: Vec<PhotoRow>,
    rsvps: Vec<RsvpResponse>,
    gallery: Vec<GalleryRow>,
    profiles: Vec<ProfileImage>,
}

#[derive(Default)]
pub struct MemoryRecords {
    tables: Mutex<Tables>,
    fail_reads: AtomicBool,
    fail_message_insert: AtomicBool,
    fail_photo_insert: AtomicBool,
    fail_rsvp_insert: AtomicBool,
}

impl MemoryRecords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_message_insert(&self, fail: bool) {
        self.fail_message_insert.store(fail, Ordering::SeqCst);
    }

    pub fn fail_photo_insert(&self, fail: bool) {
        self.fail_photo_insert.store(fail, Ordering::SeqCst);
    }

    pub fn fail_rsvp_insert(&self, fail: bool) {
        self.fail_rsvp_insert.store(fail, Ordering::SeqCst);
    }

    pub fn seed_gallery(&self, row: GalleryRow) {
        self.lock().gallery.push(row);
    }

    pub fn seed_profile(&self, row: ProfileImage) {
        self.lock().profiles.push(row);
    }

    pub fn seed_photo(&self, row: PhotoRow) {
        self.lock().photos.push(row);
    }

    #[must_use]
    pub fn rsvps(&self) -> Vec<RsvpResponse> {
        self.lock().rsvps.clone()
    }

    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.lock().photos.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn check(flag: &AtomicBool, what: &str) -> Result<(), StoreError> {
        if flag.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("injected {what} failure")));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Records for MemoryRecords {
    async fn list_messages(&self) -> Result<Vec<GuestMessage>, StoreError> {
        Self::check(&self.fail_reads, "read")?;
        let mut rows = self.lock().messages.clone();
        // Newest insert first among equal timestamps.
        rows.reverse();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert_message(&self, row: &GuestMessage) -> Result<(), StoreError> {
        Self::check(&self.fail_message_insert, "message insert")?;
        self.lock().messages.push(row.clone());
        Ok(())
    }

    async fn list_photos(&self) -> Result<Vec<PhotoRow>, StoreError> {
        Self::check(&self.fail_reads, "read")?;
        let mut rows = self.lock().photos.clone();
        // Newest insert first among equal timestamps.
        rows.reverse();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert_photo(&self, row: &PhotoRow) -> Result<(), StoreError> {
        Self::check(&self.fail_photo_insert, "photo insert")?;
        self.lock().photos.push(row.clone());
        Ok(())
    }

    async fn photo_paths(&self) -> Result<HashSet<String>, StoreError> {
        Self::check(&self.fail_reads, "read")?;
        Ok(self
            .lock()
            .photos
            .iter()
            .map(|p| p.photo_url.trim_start_matches('/').to_owned())
            .collect())
    }

    async fn insert_rsvp(&self, row: &RsvpResponse) -> Result<(), StoreError> {
        Self::check(&self.fail_rsvp_insert, "rsvp insert")?;
        self.lock().rsvps.push(row.clone());
        Ok(())
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryRow>, StoreError> {
        Self::check(&self.fail_reads, "read")?;
        let mut rows: Vec<GalleryRow> = self.lock().gallery.iter().filter(|g| g.approved).cloned().collect();
        rows.sort_by_key(|g| g.created_at);
        Ok(rows)
    }

    async fn list_profile_images(&self) -> Result<Vec<ProfileImage>, StoreError> {
        Self::check(&self.fail_reads, "read")?;
        Ok(self.lock().profiles.clone())
    }
}
