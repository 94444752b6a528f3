//! Submit status shared by the three guest forms.
//!
//! Each submit takes a sequence number. Completions and the delayed reset back
//! to idle only apply when they carry the latest number, so a timer started
//! by an earlier submit cannot clear a newer one's status.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

/// How long success/error banners stay before returning to idle.
pub const STATUS_RESET_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitTracker {
    pub status: SubmitStatus,
    seq: u64,
}

impl SubmitTracker {
    /// Start a submit. Returns its sequence number, or `None` if one is
    /// already in flight.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_busy() {
            return None;
        }
        self.seq += 1;
        self.status = SubmitStatus::Loading;
        Some(self.seq)
    }

    /// Record the outcome of submit `seq`. Stale outcomes are ignored.
    pub fn finish(&mut self, seq: u64, ok: bool) -> bool {
        if seq != self.seq || !self.is_busy() {
            return false;
        }
        self.status = if ok { SubmitStatus::Success } else { SubmitStatus::Error };
        true
    }

    /// Return to idle if `seq` is still the latest finished submit.
    pub fn reset(&mut self, seq: u64) -> bool {
        if seq != self.seq || self.is_busy() {
            return false;
        }
        self.status = SubmitStatus::Idle;
        true
    }

    pub fn is_busy(&self) -> bool {
        self.status == SubmitStatus::Loading
    }
}
