use super::*;

#[test]
fn side_defaults_to_bride() {
    assert_eq!(Side::default(), Side::Bride);
}

#[test]
fn side_as_str_matches_serde_name() {
    for side in [Side::Bride, Side::Groom] {
        assert_eq!(serde_json::to_string(&side).unwrap(), format!("\"{}\"", side.as_str()));
    }
}

#[test]
fn side_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Side::Groom).unwrap(), "\"groom\"");
}

#[test]
fn new_rsvp_default_is_attending_false_until_form_sets_it() {
    let rsvp = NewRsvp::default();
    assert!(!rsvp.attending);
    assert_eq!(rsvp.additional_guests, 0);
    assert_eq!(rsvp.guest_room_required, None);
}

#[test]
fn couple_images_from_rows_maps_each_person() {
    let rows = vec![
        ProfileImage { person: Person::Groom, image_url: "g.jpg".into() },
        ProfileImage { person: Person::Bride, image_url: "b.jpg".into() },
    ];
    let images = CoupleImages::from_rows(&rows);
    assert_eq!(images.bride, "b.jpg");
    assert_eq!(images.groom, "g.jpg");
}

#[test]
fn couple_images_from_rows_leaves_missing_person_empty() {
    let rows = vec![ProfileImage { person: Person::Bride, image_url: "b.jpg".into() }];
    let images = CoupleImages::from_rows(&rows);
    assert_eq!(images.bride, "b.jpg");
    assert!(images.groom.is_empty());
}

#[test]
fn couple_images_later_row_wins() {
    let rows = vec![
        ProfileImage { person: Person::Bride, image_url: "old.jpg".into() },
        ProfileImage { person: Person::Bride, image_url: "new.jpg".into() },
    ];
    assert_eq!(CoupleImages::from_rows(&rows).bride, "new.jpg");
}

#[test]
fn display_date_formats_utc_day() {
    // 2025-05-15T12:00:00Z
    assert_eq!(display_date(1_747_310_400_000), "15 May 2025");
}

#[test]
fn display_date_epoch() {
    assert_eq!(display_date(0), "1 January 1970");
}

#[test]
fn gallery_photo_caption_deserializes_from_object() {
    let json = r#"{"id":"00000000-0000-0000-0000-000000000000","photo_url":"a.jpg","caption":{"en":"Hi","te":"హాయ్"},"approved":true,"created_at":1}"#;
    let photo: GalleryPhoto = serde_json::from_str(json).unwrap();
    assert_eq!(photo.caption.en, "Hi");
    assert_eq!(photo.caption.te, "హాయ్");
}
