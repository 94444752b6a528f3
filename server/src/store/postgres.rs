//! Postgres-backed [`Records`].
//!
//! Timestamps are stored as `TIMESTAMPTZ` and exchanged as epoch
//! milliseconds so the wire types never carry a timezone.

use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;
use wire::{GuestMessage, Person, ProfileImage, RsvpResponse};

use super::{GalleryRow, PhotoRow, Records, StoreError};

const CREATED_AT_MS: &str = "(EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT";

#[derive(Clone)]
pub struct PgRecords {
    pool: PgPool,
}

impl PgRecords {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Records for PgRecords {
    async fn list_messages(&self) -> Result<Vec<GuestMessage>, StoreError> {
        let rows = sqlx::query_as::<_, (Uuid, String, String, bool, i64)>(&format!(
            "SELECT id, name, message, approved, {CREATED_AT_MS}
             FROM guest_messages
             ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, message, approved, created_at)| GuestMessage { id, name, message, approved, created_at })
            .collect())
    }

    async fn insert_message(&self, row: &GuestMessage) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO guest_messages (id, name, message, approved, created_at)
             VALUES ($1, $2, $3, $4, to_timestamp($5::DOUBLE PRECISION / 1000.0))",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.message)
        .bind(row.approved)
        .bind(row.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_photos(&self) -> Result<Vec<PhotoRow>, StoreError> {
        let rows = sqlx::query_as::<_, (Uuid, String, Option<String>, Option<String>, bool, i64)>(&format!(
            "SELECT id, photo_url, caption, uploaded_by, approved, {CREATED_AT_MS}
             FROM guest_photos
             ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, photo_url, caption, uploaded_by, approved, created_at)| PhotoRow {
                id,
                photo_url,
                caption,
                uploaded_by,
                approved,
                created_at,
            })
            .collect())
    }

    async fn insert_photo(&self, row: &PhotoRow) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO guest_photos (id, photo_url, caption, uploaded_by, approved, created_at)
             VALUES ($1, $2, $3, $4, $5, to_timestamp($6::DOUBLE PRECISION / 1000.0))",
        )
        .bind(row.id)
        .bind(&row.photo_url)
        .bind(&row.caption)
        .bind(&row.uploaded_by)
        .bind(row.approved)
        .bind(row.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn photo_paths(&self) -> Result<HashSet<String>, StoreError> {
        let rows = sqlx::query_as::<_, (String,)>("SELECT photo_url FROM guest_photos")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(path,)| path.trim_start_matches('/').to_owned())
            .collect())
    }

    async fn insert_rsvp(&self, row: &RsvpResponse) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO rsvps
                (id, name, side, location, attending, number_of_guests,
                 dietary_requirements, guest_room_required, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, to_timestamp($9::DOUBLE PRECISION / 1000.0))",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(row.side.as_str())
        .bind(&row.location)
        .bind(row.attending)
        .bind(i64::from(row.additional_guests))
        .bind(&row.requirements)
        .bind(row.guest_room_required)
        .bind(row.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryRow>, StoreError> {
        let rows = sqlx::query_as::<_, (Uuid, String, serde_json::Value, bool, i64)>(&format!(
            "SELECT id, photo_url, caption, approved, {CREATED_AT_MS}
             FROM gallery_photos
             WHERE approved = TRUE
             ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, photo_url, caption, approved, created_at)| GalleryRow { id, photo_url, caption, approved, created_at })
            .collect())
    }

    async fn list_profile_images(&self) -> Result<Vec<ProfileImage>, StoreError> {
        let rows = sqlx::query_as::<_, (String, String)>("SELECT person, image_url FROM profile_images")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|(person, image_url)| {
                let person = match person.as_str() {
                    "bride" => Person::Bride,
                    "groom" => Person::Groom,
                    other => return Err(StoreError::Invalid(format!("unknown profile person {other:?}"))),
                };
                Ok(ProfileImage { person, image_url })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;
