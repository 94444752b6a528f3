use super::*;
use crate::state::test_helpers::test_app;
use crate::storage::ObjectStoreError;
use crate::store::StoreError;
use axum::http::Request;
use wire::Side;

fn parts_with(forwarded: Option<&str>, peer: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/messages");
    if let Some(value) = forwarded {
        builder = builder.header("x-forwarded-for", value);
    }
    let (mut parts, ()) = builder.body(()).unwrap().into_parts();
    if let Some(addr) = peer {
        parts.extensions.insert(ConnectInfo(addr.parse::<SocketAddr>().unwrap()));
    }
    parts
}

fn store_down() -> StoreError {
    StoreError::Unavailable("down".into())
}

// =============================================================================
// CLIENT KEY
// =============================================================================

#[test]
fn client_key_prefers_first_forwarded_hop() {
    let parts = parts_with(Some(" 203.0.113.7 , 10.0.0.1"), Some("127.0.0.1:4000"));
    assert_eq!(client_key(&parts), "203.0.113.7");
}

#[test]
fn client_key_falls_back_to_peer_ip() {
    let parts = parts_with(None, Some("198.51.100.2:5555"));
    assert_eq!(client_key(&parts), "198.51.100.2");

    let blank = parts_with(Some(""), Some("198.51.100.2:5555"));
    assert_eq!(client_key(&blank), "198.51.100.2");
}

#[test]
fn client_key_is_unknown_without_any_source() {
    assert_eq!(client_key(&parts_with(None, None)), UNKNOWN_CLIENT);
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

#[test]
fn message_errors_map_to_status() {
    assert_eq!(message_error_to_status(MessageError::MissingName), StatusCode::BAD_REQUEST);
    assert_eq!(
        message_error_to_status(MessageError::TooLong { field: "message", max: 2000 }),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(message_error_to_status(MessageError::Store(store_down())), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn photo_errors_map_to_status() {
    assert_eq!(photo_error_to_status(PhotoError::MissingUploader), StatusCode::BAD_REQUEST);
    assert_eq!(photo_error_to_status(PhotoError::NotAnImage("text/plain".into())), StatusCode::BAD_REQUEST);
    assert_eq!(
        photo_error_to_status(PhotoError::TooLarge { size: 2048, max: 1024 }),
        StatusCode::PAYLOAD_TOO_LARGE
    );
    assert_eq!(
        photo_error_to_status(PhotoError::Storage(ObjectStoreError::Exists("x.jpg".into()))),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(photo_error_to_status(PhotoError::Store(store_down())), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn rsvp_and_gallery_errors_map_to_status() {
    assert_eq!(rsvp_error_to_status(RsvpError::MissingLocation), StatusCode::BAD_REQUEST);
    assert_eq!(rsvp_error_to_status(RsvpError::TooManyGuests { max: 50 }), StatusCode::BAD_REQUEST);
    assert_eq!(rsvp_error_to_status(RsvpError::Store(store_down())), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(gallery_error_to_status(GalleryError::Store(store_down())), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// HANDLERS
// =============================================================================

#[tokio::test]
async fn submit_message_returns_created_row() {
    let app = test_app();
    let body = NewMessage { name: "Lakshmi".into(), message: "Congratulations!".into() };

    let (status, Json(row)) = submit_message(State(app.state.clone()), ClientKey("a".into()), Json(body))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert!(!row.approved);

    let Json(listed) = list_messages(State(app.state)).await.unwrap();
    assert_eq!(listed, vec![row]);
}

#[tokio::test]
async fn blank_message_is_bad_request() {
    let app = test_app();
    let body = NewMessage { name: "Lakshmi".into(), message: "   ".into() };
    let err = submit_message(State(app.state), ClientKey("a".into()), Json(body)).await.unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sixth_write_from_one_client_is_rate_limited() {
    let app = test_app();
    for i in 0..5 {
        let body = NewMessage { name: format!("Guest {i}"), message: "Best wishes".into() };
        submit_message(State(app.state.clone()), ClientKey("203.0.113.9".into()), Json(body))
            .await
            .unwrap();
    }

    let body = NewMessage { name: "Guest 6".into(), message: "Best wishes".into() };
    let err = submit_message(State(app.state.clone()), ClientKey("203.0.113.9".into()), Json(body))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::TOO_MANY_REQUESTS);

    let other = NewMessage { name: "Neighbour".into(), message: "Hello".into() };
    assert!(submit_message(State(app.state), ClientKey("203.0.113.10".into()), Json(other)).await.is_ok());
}

#[tokio::test]
async fn rsvp_decline_is_created() {
    let app = test_app();
    let body = NewRsvp {
        name: "Venkat".into(),
        side: Side::Groom,
        location: "Guntur".into(),
        attending: false,
        ..NewRsvp::default()
    };
    let (status, Json(row)) = submit_rsvp(State(app.state), ClientKey("a".into()), Json(body)).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert!(!row.attending);
    assert_eq!(app.records.rsvps().len(), 1);
}

#[tokio::test]
async fn read_failures_are_internal_errors() {
    let app = test_app();
    app.records.fail_reads(true);
    assert_eq!(list_messages(State(app.state.clone())).await.unwrap_err(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(list_photos(State(app.state.clone())).await.unwrap_err(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(list_gallery(State(app.state.clone())).await.unwrap_err(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(couple_images(State(app.state)).await.unwrap_err(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn settings_expose_only_the_map_key() {
    let mut app = test_app();
    let Json(settings) = site_settings(State(app.state.clone())).await;
    assert_eq!(settings.maps_embed_key, None);

    let mut config = (*app.state.config).clone();
    config.maps_embed_key = Some("maps-key".into());
    app.state.config = std::sync::Arc::new(config);
    let Json(settings) = site_settings(State(app.state)).await;
    assert_eq!(settings.maps_embed_key.as_deref(), Some("maps-key"));
}
