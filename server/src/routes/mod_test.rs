use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use wire::{GuestMessage, GuestPhoto, NewMessage};

use super::test_helpers::spawn_api;
use crate::state::test_helpers::test_app;

fn photo_form(bytes: Vec<u8>, file_name: &str, mime: &str) -> Form {
    Form::new()
        .part("file", Part::bytes(bytes).file_name(file_name.to_owned()).mime_str(mime).unwrap())
        .text("uploaded_by", "Ravi")
        .text("caption", "Mehendi night")
}

#[tokio::test]
async fn healthz_is_ok() {
    let addr = spawn_api(test_app().state).await;
    let res = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn message_post_then_list_over_http() {
    let app = test_app();
    let addr = spawn_api(app.state.clone()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("http://{addr}/api/messages"))
        .json(&NewMessage { name: "Anitha".into(), message: "Many happy returns".into() })
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    let created: GuestMessage = res.json().await.unwrap();

    let listed: Vec<GuestMessage> = client
        .get(format!("http://{addr}/api/messages"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn forwarded_client_is_rate_limited_after_five_writes() {
    let addr = spawn_api(test_app().state).await;
    let client = reqwest::Client::new();
    let post = |i: usize| {
        client
            .post(format!("http://{addr}/api/messages"))
            .header("x-forwarded-for", "203.0.113.50")
            .json(&NewMessage { name: format!("Guest {i}"), message: "Hi".into() })
            .send()
    };

    for i in 0..5 {
        assert_eq!(post(i).await.unwrap().status(), reqwest::StatusCode::CREATED);
    }
    assert_eq!(post(5).await.unwrap().status(), reqwest::StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn photo_upload_stores_object_and_row() {
    let app = test_app();
    let addr = spawn_api(app.state.clone()).await;

    let res = reqwest::Client::new()
        .post(format!("http://{addr}/api/photos"))
        .multipart(photo_form(vec![0xFF, 0xD8, 0xFF], "IMG_0042.JPG", "image/jpeg"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    let photo: GuestPhoto = res.json().await.unwrap();

    assert_eq!(photo.uploaded_by.as_deref(), Some("Ravi"));
    assert_eq!(photo.caption.as_deref(), Some("Mehendi night"));
    assert!(photo.url.starts_with("/storage/photos/"));
    assert_eq!(app.objects.names(), vec![photo.path.clone()]);
    assert_eq!(app.records.photo_count(), 1);
}

#[tokio::test]
async fn photo_upload_rejections_leave_nothing_behind() {
    let app = test_app();
    let addr = spawn_api(app.state.clone()).await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/api/photos");

    let not_image = client.post(&url).multipart(photo_form(b"hello".to_vec(), "notes.txt", "text/plain")).send();
    assert_eq!(not_image.await.unwrap().status(), reqwest::StatusCode::BAD_REQUEST);

    let over_limit = client.post(&url).multipart(photo_form(vec![0; 2048], "big.jpg", "image/jpeg")).send();
    assert_eq!(over_limit.await.unwrap().status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE);

    let far_over = client.post(&url).multipart(photo_form(vec![0; 256 * 1024], "huge.jpg", "image/jpeg")).send();
    assert_eq!(far_over.await.unwrap().status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE);

    assert!(app.objects.names().is_empty());
    assert_eq!(app.records.photo_count(), 0);
}

#[tokio::test]
async fn failed_photo_row_insert_is_a_server_error_with_object_removed() {
    let app = test_app();
    app.records.fail_photo_insert(true);
    let addr = spawn_api(app.state.clone()).await;

    let res = reqwest::Client::new()
        .post(format!("http://{addr}/api/photos"))
        .multipart(photo_form(vec![1, 2, 3], "a.png", "image/png"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert!(app.objects.names().is_empty());
}

#[tokio::test]
async fn stored_photos_are_served_from_storage_dir() {
    let dir = std::env::temp_dir().join(format!("kalyanam-serve-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("1700000000000-abc.jpg"), b"jpeg-bytes").unwrap();

    let mut app = test_app();
    let mut config = (*app.state.config).clone();
    config.storage_dir = dir.clone();
    app.state.config = Arc::new(config);
    let addr = spawn_api(app.state).await;

    let res = reqwest::get(format!("http://{addr}/storage/photos/1700000000000-abc.jpg")).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert_eq!(res.bytes().await.unwrap().as_ref(), b"jpeg-bytes");

    std::fs::remove_dir_all(dir).unwrap();
}
