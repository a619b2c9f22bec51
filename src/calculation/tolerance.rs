//! Tolerance resolution: snapping bookings to plan boundaries.
//!
//! A booking within the grace window around a plan boundary is treated as if
//! it happened exactly at the boundary. Tolerance applies before rounding,
//! independently for arrival and departure, with direction-specific grace
//! windows.

/// Snaps a booking time to a plan boundary when within the grace window.
///
/// Returns `boundary` when
/// `boundary - minus_grace <= minutes <= boundary + plus_grace`, otherwise
/// the input unchanged. Negative grace values are treated as zero.
///
/// # Example
///
/// ```
/// use time_engine::calculation::apply_tolerance;
///
/// // 08:03 arrival with 5 minutes of grace past an 08:00 boundary
/// assert_eq!(apply_tolerance(483, 480, 5, 10), 480);
/// // 08:06 is outside the window
/// assert_eq!(apply_tolerance(486, 480, 5, 10), 486);
/// ```
pub fn apply_tolerance(minutes: i32, boundary: i32, plus_grace: i32, minus_grace: i32) -> i32 {
    let plus = plus_grace.max(0);
    let minus = minus_grace.max(0);

    if minutes >= boundary - minus && minutes <= boundary + plus {
        boundary
    } else {
        minutes
    }
}
