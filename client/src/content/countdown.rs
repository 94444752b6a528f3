//! Countdown to the wedding.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use crate::i18n::Tr;

/// 2025-05-15 00:00 IST in epoch milliseconds.
pub const WEDDING_AT_MS: i64 = 1_747_247_400_000;

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

pub const DAYS: Tr = Tr::new("Days", "రోజులు");
pub const HOURS: Tr = Tr::new("Hours", "గంటలు");
pub const MINUTES: Tr = Tr::new("Minutes", "నిమిషాలు");
pub const SECONDS: Tr = Tr::new("Seconds", "సెకన్లు");

/// Time left until a target, split into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Remaining time from `now_ms` to `target_ms`; all zeros once passed.
    pub fn remaining(target_ms: i64, now_ms: i64) -> Self {
        let left = target_ms.saturating_sub(now_ms);
        if left <= 0 {
            return Self::default();
        }
        Self {
            days: left / DAY_MS,
            hours: (left % DAY_MS) / HOUR_MS,
            minutes: (left % HOUR_MS) / MINUTE_MS,
            seconds: (left % MINUTE_MS) / SECOND_MS,
        }
    }

    /// Unit values paired with their labels, largest first.
    pub fn units(self) -> [(i64, Tr); 4] {
        [(self.days, DAYS), (self.hours, HOURS), (self.minutes, MINUTES), (self.seconds, SECONDS)]
    }
}

/// Zero-pad a unit to at least two digits.
pub fn pad(value: i64) -> String {
    format!("{value:02}")
}

/// Current wall-clock time in the browser; zero on the server.
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
