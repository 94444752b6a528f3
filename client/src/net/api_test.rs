use super::*;

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("photo upload", 413), "photo upload failed: 413");
}

#[test]
fn photo_fields_include_caption_when_present() {
    assert_eq!(
        photo_text_fields("Sita", Some("Haldi")),
        vec![("uploaded_by", "Sita"), ("caption", "Haldi")]
    );
}

#[test]
fn photo_fields_skip_blank_caption() {
    assert_eq!(photo_text_fields("Sita", Some("  ")), vec![("uploaded_by", "Sita")]);
    assert_eq!(photo_text_fields("Sita", None), vec![("uploaded_by", "Sita")]);
}

#[test]
fn endpoints_live_under_api() {
    for endpoint in [
        MESSAGES_ENDPOINT,
        PHOTOS_ENDPOINT,
        RSVPS_ENDPOINT,
        GALLERY_ENDPOINT,
        PROFILES_ENDPOINT,
        SETTINGS_ENDPOINT,
    ] {
        assert!(endpoint.starts_with("/api/"), "{endpoint}");
    }
}
