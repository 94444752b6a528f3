//! Guest-facing REST routes: messages, photos, RSVPs, and curated content.
//!
//! DESIGN
//! ======
//! Handlers are thin: extract, rate-limit writes, call the service, and map
//! the service error to a status code. Each write is counted against the
//! caller's client key (first `X-Forwarded-For` hop, else the peer address)
//! and against the global write budget.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts, Multipart, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::Json;
use tracing::{error, warn};
use wire::{CoupleImages, GalleryPhoto, GuestMessage, GuestPhoto, NewMessage, NewRsvp, RsvpResponse, SiteSettings};

use crate::rate_limit::RateLimitError;
use crate::services::gallery::{self, GalleryError};
use crate::services::messages::{self, MessageError};
use crate::services::photos::{self, PhotoError, PhotoUpload};
use crate::services::rsvp::{self, RsvpError};
use crate::state::AppState;

const UNKNOWN_CLIENT: &str = "unknown";

// =============================================================================
// CLIENT KEY
// =============================================================================

/// Rate-limit key for the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientKey(pub String);

impl<S> FromRequestParts<S> for ClientKey
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(client_key(parts)))
    }
}

fn client_key(parts: &Parts) -> String {
    let forwarded = parts
        .headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    if let Some(ip) = forwarded {
        return ip.to_owned();
    }
    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| UNKNOWN_CLIENT.to_owned(), |ConnectInfo(addr)| addr.ip().to_string())
}

fn check_rate(state: &AppState, key: &ClientKey) -> Result<(), StatusCode> {
    state.rate_limiter.check_and_record(&key.0).map_err(rate_limit_to_status)
}

pub(crate) fn rate_limit_to_status(err: RateLimitError) -> StatusCode {
    warn!(error = %err, "write rejected by rate limiter");
    StatusCode::TOO_MANY_REQUESTS
}

// =============================================================================
// MESSAGES
// =============================================================================

/// `GET /api/messages`: every message, newest first.
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<GuestMessage>>, StatusCode> {
    let rows = messages::list_messages(&state).await.map_err(message_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/messages`: leave a message for the couple.
pub async fn submit_message(
    State(state): State<AppState>,
    key: ClientKey,
    Json(body): Json<NewMessage>,
) -> Result<(StatusCode, Json<GuestMessage>), StatusCode> {
    check_rate(&state, &key)?;
    let row = messages::submit_message(&state, body)
        .await
        .map_err(message_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub(crate) fn message_error_to_status(err: MessageError) -> StatusCode {
    match err {
        MessageError::MissingName | MessageError::MissingMessage | MessageError::TooLong { .. } => {
            StatusCode::BAD_REQUEST
        }
        MessageError::Store(e) => {
            error!(error = %e, "message store failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

// =============================================================================
// PHOTOS
// =============================================================================

/// `GET /api/photos`: every shared photo, newest first.
pub async fn list_photos(State(state): State<AppState>) -> Result<Json<Vec<GuestPhoto>>, StatusCode> {
    let rows = photos::list_photos(&state).await.map_err(photo_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/photos`: multipart upload with `file`, `uploaded_by`, and an
/// optional `caption`.
pub async fn share_photo(
    State(state): State<AppState>,
    key: ClientKey,
    multipart: Multipart,
) -> Result<(StatusCode, Json<GuestPhoto>), StatusCode> {
    check_rate(&state, &key)?;
    let upload = read_upload(multipart).await?;
    let photo = photos::share_photo(&state, upload)
        .await
        .map_err(photo_error_to_status)?;
    Ok((StatusCode::CREATED, Json(photo)))
}

async fn read_upload(mut multipart: Multipart) -> Result<PhotoUpload, StatusCode> {
    let mut upload = PhotoUpload::default();
    while let Some(field) = multipart.next_field().await.map_err(|e| e.status())? {
        match field.name() {
            Some("file") => {
                upload.file_name = field.file_name().unwrap_or_default().to_owned();
                upload.content_type = field.content_type().map(str::to_owned);
                upload.bytes = field.bytes().await.map_err(|e| e.status())?.to_vec();
            }
            Some("uploaded_by") => upload.uploaded_by = field.text().await.map_err(|e| e.status())?,
            Some("caption") => upload.caption = Some(field.text().await.map_err(|e| e.status())?),
            _ => {}
        }
    }
    Ok(upload)
}

pub(crate) fn photo_error_to_status(err: PhotoError) -> StatusCode {
    match err {
        PhotoError::MissingFile | PhotoError::MissingUploader | PhotoError::NotAnImage(_) => StatusCode::BAD_REQUEST,
        PhotoError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        PhotoError::Storage(e) => {
            error!(error = %e, "photo object storage failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        PhotoError::Store(e) => {
            error!(error = %e, "photo record store failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

// =============================================================================
// RSVP
// =============================================================================

/// `POST /api/rsvps`: record an RSVP.
pub async fn submit_rsvp(
    State(state): State<AppState>,
    key: ClientKey,
    Json(body): Json<NewRsvp>,
) -> Result<(StatusCode, Json<RsvpResponse>), StatusCode> {
    check_rate(&state, &key)?;
    let row = rsvp::submit_rsvp(&state, body).await.map_err(rsvp_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub(crate) fn rsvp_error_to_status(err: RsvpError) -> StatusCode {
    match err {
        RsvpError::MissingName | RsvpError::MissingLocation | RsvpError::TooManyGuests { .. } => {
            StatusCode::BAD_REQUEST
        }
        RsvpError::Store(e) => {
            error!(error = %e, "rsvp store failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

// =============================================================================
// CURATED CONTENT
// =============================================================================

/// `GET /api/gallery`: approved gallery photos, oldest first.
pub async fn list_gallery(State(state): State<AppState>) -> Result<Json<Vec<GalleryPhoto>>, StatusCode> {
    let rows = gallery::list_gallery(&state).await.map_err(gallery_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/profiles`: bride and groom portraits.
pub async fn couple_images(State(state): State<AppState>) -> Result<Json<CoupleImages>, StatusCode> {
    let images = gallery::couple_images(&state).await.map_err(gallery_error_to_status)?;
    Ok(Json(images))
}

/// `GET /api/settings`: public client settings.
pub async fn site_settings(State(state): State<AppState>) -> Json<SiteSettings> {
    Json(SiteSettings { maps_embed_key: state.config.maps_embed_key.clone() })
}

pub(crate) fn gallery_error_to_status(err: GalleryError) -> StatusCode {
    match err {
        GalleryError::Store(e) => {
            error!(error = %e, "curated content read failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "guest_test.rs"]
mod tests;
