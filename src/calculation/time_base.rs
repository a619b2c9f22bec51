//! Minute-of-day arithmetic and cross-midnight normalization.
//!
//! All booking times in the engine are minutes since midnight. A day has
//! 1440 minutes; valid booking times lie in 0–1439. Intervals that span
//! midnight are normalized by shifting the out-side one day forward.

/// The number of minutes in one day.
pub const MINUTES_PER_DAY: i32 = 1440;

/// The last valid minute of a day (23:59).
pub const LAST_MINUTE: i32 = MINUTES_PER_DAY - 1;

/// Returns true iff `minutes` is a valid time-of-day (0–1439).
///
/// # Example
///
/// ```
/// use time_engine::calculation::is_valid_minute;
///
/// assert!(is_valid_minute(0));
/// assert!(is_valid_minute(1439));
/// assert!(!is_valid_minute(1440));
/// assert!(!is_valid_minute(-1));
/// ```
pub fn is_valid_minute(minutes: i32) -> bool {
    (0..MINUTES_PER_DAY).contains(&minutes)
}

/// Normalizes an `out` time against its paired `in` time.
///
/// An `out` numerically less than the `in` means the interval crossed
/// midnight; one day is added so the difference stays non-negative.
pub fn normalize_out(in_minutes: i32, out_minutes: i32) -> i32 {
    if out_minutes < in_minutes {
        out_minutes + MINUTES_PER_DAY
    } else {
        out_minutes
    }
}

/// Returns the duration between an `in` and an `out` time in minutes.
///
/// The `out` side is cross-midnight normalized first, so the result is
/// never negative for any valid in/out pair.
///
/// # Example
///
/// ```
/// use time_engine::calculation::interval_minutes;
///
/// assert_eq!(interval_minutes(480, 1020), 540);  // 08:00 - 17:00
/// assert_eq!(interval_minutes(1320, 360), 480);  // 22:00 - 06:00 next day
/// ```
pub fn interval_minutes(in_minutes: i32, out_minutes: i32) -> i32 {
    normalize_out(in_minutes, out_minutes) - in_minutes
}
