//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Loads return `Option` and submits return `Result<_, String>`; panels turn
//! either into a status banner rather than failing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::records::{CoupleImages, GalleryPhoto, GuestMessage, GuestPhoto, NewMessage, NewRsvp, SiteSettings};

pub const MESSAGES_ENDPOINT: &str = "/api/messages";
pub const PHOTOS_ENDPOINT: &str = "/api/photos";
pub const RSVPS_ENDPOINT: &str = "/api/rsvps";
pub const GALLERY_ENDPOINT: &str = "/api/gallery";
pub const PROFILES_ENDPOINT: &str = "/api/profiles";
pub const SETTINGS_ENDPOINT: &str = "/api/settings";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Text parts of the photo upload form, in send order. A blank caption is
/// left out so the server stores none.
#[cfg(any(test, feature = "hydrate"))]
fn photo_text_fields<'a>(uploaded_by: &'a str, caption: Option<&'a str>) -> Vec<(&'static str, &'a str)> {
    let mut fields = vec![("uploaded_by", uploaded_by)];
    if let Some(caption) = caption.filter(|c| !c.trim().is_empty()) {
        fields.push(("caption", caption));
    }
    fields
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(url).send().await.ok()?;
    if !resp.ok() {
        leptos::logging::warn!("{}", request_failed_message(url, resp.status()));
        return None;
    }
    resp.json::<T>().await.ok()
}

/// Fetch all guest messages, newest first.
pub async fn fetch_messages() -> Option<Vec<GuestMessage>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(MESSAGES_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Post a guest message.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx response.
pub async fn submit_message(body: &NewMessage) -> Result<GuestMessage, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(MESSAGES_ENDPOINT)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("message submit", resp.status()));
        }
        resp.json::<GuestMessage>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err("not available on server".to_owned())
    }
}

/// Fetch every shared photo, approved or not.
pub async fn fetch_photos() -> Option<Vec<GuestPhoto>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(PHOTOS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Upload a photo with its uploader name and optional caption as one
/// multipart request.
///
/// # Errors
///
/// Returns an error string if the form cannot be built, the request fails,
/// or the server rejects the upload.
#[cfg(feature = "hydrate")]
pub async fn upload_photo(file: &web_sys::File, uploaded_by: &str, caption: Option<&str>) -> Result<GuestPhoto, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("{e:?}"))?;
    for (name, value) in photo_text_fields(uploaded_by, caption) {
        form.append_with_str(name, value).map_err(|e| format!("{e:?}"))?;
    }

    let resp = gloo_net::http::Request::post(PHOTOS_ENDPOINT)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("photo upload", resp.status()));
    }
    resp.json::<GuestPhoto>().await.map_err(|e| e.to_string())
}

/// Submit an RSVP. Nothing is read back.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx response.
pub async fn submit_rsvp(body: &NewRsvp) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(RSVPS_ENDPOINT)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("rsvp submit", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err("not available on server".to_owned())
    }
}

/// Fetch approved gallery photos, oldest first.
pub async fn fetch_gallery() -> Option<Vec<GalleryPhoto>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(GALLERY_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub async fn fetch_profiles() -> Option<CoupleImages> {
    #[cfg(feature = "hydrate")]
    {
        get_json(PROFILES_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub async fn fetch_settings() -> Option<SiteSettings> {
    #[cfg(feature = "hydrate")]
    {
        get_json(SETTINGS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
