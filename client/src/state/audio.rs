//! Playback state for the background music and the Sumuhurtham clip.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub playing: bool,
    pub muted: bool,
    /// Background music waits for the first click anywhere on the page.
    pub unlocked: bool,
}

impl PlayerState {
    /// First user gesture. Returns true if playback should start now.
    pub fn unlock(&mut self) -> bool {
        if self.unlocked {
            return false;
        }
        self.unlocked = true;
        self.playing = true;
        true
    }

    /// Flip play/pause. Returns the new playing flag.
    pub fn toggle_play(&mut self) -> bool {
        self.unlocked = true;
        self.playing = !self.playing;
        self.playing
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn ended(&mut self) {
        self.playing = false;
    }
}
