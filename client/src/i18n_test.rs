use super::*;

#[test]
fn codes_round_trip_through_from_code() {
    for lang in [Language::English, Language::Telugu] {
        assert_eq!(Language::from_code(lang.code()), Some(lang));
    }
    assert_eq!(Language::from_code("hi"), None);
}

#[test]
fn other_swaps_languages() {
    assert_eq!(Language::English.other(), Language::Telugu);
    assert_eq!(Language::Telugu.other().other(), Language::Telugu);
}

#[test]
fn tr_picks_by_language() {
    let back = Tr::new("Back", "వెనుకకు");
    assert_eq!(back.get(Language::English), "Back");
    assert_eq!(back.get(Language::Telugu), "వెనుకకు");
    assert_eq!(Tr::same("RSVP").get(Language::Telugu), "RSVP");
}

#[test]
fn caption_picks_runtime_text() {
    let text = wire::BilingualText { en: "Haldi".into(), te: "పసుపు".into() };
    assert_eq!(caption(&text, Language::English), "Haldi");
    assert_eq!(caption(&text, Language::Telugu), "పసుపు");
}
