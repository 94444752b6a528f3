use super::*;
use crate::state::submit::SubmitStatus;
use uuid::Uuid;

fn message(name: &str) -> GuestMessage {
    GuestMessage {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        message: "Congratulations".to_owned(),
        approved: true,
        created_at: 1_700_000_000_000,
    }
}

#[test]
fn new_state_is_loading() {
    let state = MessagesState::new();
    assert!(state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn load_replaces_list() {
    let mut state = MessagesState::new();
    state.apply_loaded(Some(vec![message("a"), message("b")]));
    state.apply_loaded(Some(vec![message("c")]));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "c");
    assert!(!state.loading);
}

#[test]
fn failed_load_keeps_previous_list() {
    let mut state = MessagesState::new();
    state.apply_loaded(Some(vec![message("a")]));
    state.apply_loaded(None);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn draft_requires_both_fields() {
    let mut state = MessagesState::new();
    state.name = "Ravi".into();
    state.text = "   ".into();
    assert_eq!(state.draft(), None);
    assert!(!state.can_submit());

    state.text = " Best wishes ".into();
    let draft = state.draft().unwrap();
    assert_eq!(draft.name, "Ravi");
    assert_eq!(draft.message, "Best wishes");
}

#[test]
fn success_clears_form() {
    let mut state = MessagesState::new();
    state.name = "Ravi".into();
    state.text = "Best wishes".into();
    let seq = state.submit.begin().unwrap();
    assert!(!state.can_submit());
    state.finish_submit(seq, true);
    assert_eq!(state.submit.status, SubmitStatus::Success);
    assert!(state.name.is_empty());
    assert!(state.text.is_empty());
}

#[test]
fn failure_keeps_form_for_retry() {
    let mut state = MessagesState::new();
    state.name = "Ravi".into();
    state.text = "Best wishes".into();
    let seq = state.submit.begin().unwrap();
    state.finish_submit(seq, false);
    assert_eq!(state.submit.status, SubmitStatus::Error);
    assert_eq!(state.name, "Ravi");
    assert!(state.can_submit());
}
