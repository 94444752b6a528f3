use super::*;
use crate::i18n::Language;

#[test]
fn every_entry_is_translated() {
    for entry in STORY.iter().chain(MARRIAGE_EVENTS.iter()) {
        for lang in [Language::English, Language::Telugu] {
            assert!(!entry.date.get(lang).is_empty());
            assert!(!entry.title.get(lang).is_empty());
            assert!(!entry.description.get(lang).is_empty());
        }
    }
}

#[test]
fn story_ends_on_the_wedding_day() {
    let last = STORY.last().unwrap();
    assert_eq!(last.date.get(Language::English), "15th May 2025");
}

#[test]
fn ceremony_is_at_the_muhurtham_in_both_languages() {
    let ceremony = MARRIAGE_EVENTS.last().unwrap();
    assert!(ceremony.date.get(Language::English).ends_with("04:58"));
    assert!(ceremony.date.get(Language::Telugu).ends_with("04:58"));
}

#[test]
fn entries_alternate_sides() {
    assert!(is_left(0));
    assert!(!is_left(1));
    assert!(is_left(6));
}
