use super::*;
use crate::state::test_helpers::test_app;
use serde_json::json;
use uuid::Uuid;
use wire::{Person, ProfileImage};

fn gallery_row(url: &str, approved: bool, created_at: i64, caption: Value) -> GalleryRow {
    GalleryRow { id: Uuid::new_v4(), photo_url: url.into(), caption, approved, created_at }
}

#[test]
fn parse_caption_reads_object() {
    let caption = parse_caption(&json!({"en": "Engagement", "te": "నిశ్చితార్థం"})).unwrap();
    assert_eq!(caption.en, "Engagement");
    assert_eq!(caption.te, "నిశ్చితార్థం");
}

#[test]
fn parse_caption_reads_json_encoded_string() {
    let raw = Value::String(r#"{"en":"Haldi","te":"పసుపు"}"#.into());
    let caption = parse_caption(&raw).unwrap();
    assert_eq!(caption.en, "Haldi");
    assert_eq!(caption.te, "పసుపు");
}

#[test]
fn parse_caption_rejects_other_shapes() {
    assert!(parse_caption(&Value::String("just text".into())).is_none());
    assert!(parse_caption(&json!(42)).is_none());
    assert!(parse_caption(&json!({"en": "missing telugu"})).is_none());
}

#[tokio::test]
async fn gallery_lists_only_approved_oldest_first() {
    let app = test_app();
    let caption = json!({"en": "a", "te": "b"});
    app.records.seed_gallery(gallery_row("late.jpg", true, 300, caption.clone()));
    app.records.seed_gallery(gallery_row("hidden.jpg", false, 100, caption.clone()));
    app.records.seed_gallery(gallery_row("early.jpg", true, 200, caption));

    let photos = list_gallery(&app.state).await.unwrap();
    let urls: Vec<&str> = photos.iter().map(|p| p.photo_url.as_str()).collect();
    assert_eq!(urls, vec!["early.jpg", "late.jpg"]);
}

#[tokio::test]
async fn gallery_keeps_photo_with_undecodable_caption() {
    let app = test_app();
    app.records.seed_gallery(gallery_row("x.jpg", true, 1, json!(null)));

    let photos = list_gallery(&app.state).await.unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].caption, BilingualText::default());
}

#[tokio::test]
async fn couple_images_reduce_rows() {
    let app = test_app();
    app.records.seed_profile(ProfileImage { person: Person::Bride, image_url: "/img/gayathri.jpg".into() });

    let images = couple_images(&app.state).await.unwrap();
    assert_eq!(images.bride, "/img/gayathri.jpg");
    assert_eq!(images.groom, "");
}

#[tokio::test]
async fn read_failure_is_surfaced() {
    let app = test_app();
    app.records.fail_reads(true);
    assert!(list_gallery(&app.state).await.is_err());
    assert!(couple_images(&app.state).await.is_err());
}
