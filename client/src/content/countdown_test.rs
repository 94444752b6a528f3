use super::*;

#[test]
fn remaining_splits_into_units() {
    let left = 2 * DAY_MS + 3 * HOUR_MS + 4 * MINUTE_MS + 5 * SECOND_MS + 999;
    let c = Countdown::remaining(WEDDING_AT_MS, WEDDING_AT_MS - left);
    assert_eq!(c, Countdown { days: 2, hours: 3, minutes: 4, seconds: 5 });
}

#[test]
fn remaining_is_zero_after_target() {
    assert_eq!(Countdown::remaining(WEDDING_AT_MS, WEDDING_AT_MS), Countdown::default());
    assert_eq!(Countdown::remaining(WEDDING_AT_MS, WEDDING_AT_MS + DAY_MS), Countdown::default());
}

#[test]
fn wedding_instant_is_midnight_ist() {
    // 2025-05-14 18:30 UTC
    assert_eq!(WEDDING_AT_MS % DAY_MS, (18 * HOUR_MS) + (30 * MINUTE_MS));
}

#[test]
fn pad_uses_two_digits() {
    assert_eq!(pad(0), "00");
    assert_eq!(pad(7), "07");
    assert_eq!(pad(123), "123");
}

#[test]
fn units_are_ordered_largest_first() {
    let c = Countdown { days: 1, hours: 2, minutes: 3, seconds: 4 };
    let values: Vec<i64> = c.units().iter().map(|(v, _)| *v).collect();
    assert_eq!(values, vec![1, 2, 3, 4]);
    assert_eq!(c.units()[0].1, DAYS);
}
