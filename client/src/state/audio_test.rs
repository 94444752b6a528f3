use super::*;

#[test]
fn first_click_starts_playback_once() {
    let mut player = PlayerState::default();
    assert!(player.unlock());
    assert!(player.playing);
    assert!(!player.unlock());
}

#[test]
fn toggle_after_unlock_pauses() {
    let mut player = PlayerState::default();
    player.unlock();
    assert!(!player.toggle_play());
    assert!(player.toggle_play());
}

#[test]
fn toggle_before_unlock_counts_as_unlock() {
    let mut player = PlayerState::default();
    assert!(player.toggle_play());
    assert!(!player.unlock());
    assert!(player.playing);
}

#[test]
fn mute_is_independent_of_play() {
    let mut player = PlayerState::default();
    assert!(player.toggle_mute());
    assert!(!player.playing);
    assert!(!player.toggle_mute());
}

#[test]
fn ended_stops_playing() {
    let mut player = PlayerState::default();
    player.toggle_play();
    player.ended();
    assert!(!player.playing);
}
