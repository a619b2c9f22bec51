//! Booking model and related types.
//!
//! This module defines the [`Booking`] value object for a single clock event
//! and the [`BookingPair`] interval formed by matching an `in` booking with
//! the corresponding `out` booking.

use serde::{Deserialize, Serialize};

use crate::calculation::{interval_minutes, normalize_out};

/// The direction of a clock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingDirection {
    /// Arrival or break start.
    In,
    /// Departure or break end.
    Out,
}

/// The category a clock event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingCategory {
    /// Work time.
    Work,
    /// Break time.
    Break,
}

/// A single clock event with a time-of-day and direction.
///
/// Bookings are produced externally from persisted records and passed to the
/// engine fully resolved. Times are minutes since midnight (0–1439); values
/// outside that range are rejected by the daily calculator with an
/// `invalid_time` error code rather than a panic.
///
/// # Example
///
/// ```
/// use time_engine::models::{Booking, BookingCategory, BookingDirection};
///
/// let booking = Booking {
///     id: "b1".to_string(),
///     minutes: 8 * 60,
///     direction: BookingDirection::In,
///     category: BookingCategory::Work,
///     pair_id: None,
/// };
/// assert_eq!(booking.minutes, 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking.
    pub id: String,
    /// Time of day in minutes since midnight (0–1439).
    pub minutes: i32,
    /// Whether this is an `in` or an `out` event.
    pub direction: BookingDirection,
    /// Whether the event bounds work time or break time.
    pub category: BookingCategory,
    /// Optional pre-assigned pair identifier linking an in/out couple.
    #[serde(default)]
    pub pair_id: Option<String>,
}

/// A matched in/out interval of a single category.
///
/// Durations are cross-midnight normalized: an `out` time numerically less
/// than the `in` time is shifted by one day before the difference is taken,
/// so `duration_minutes` is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPair {
    /// The id of the `in` booking.
    pub in_id: String,
    /// The id of the `out` booking.
    pub out_id: String,
    /// The category shared by both bookings.
    pub category: BookingCategory,
    /// The calculated `in` time in minutes since midnight.
    pub start_minutes: i32,
    /// The calculated `out` time; may exceed 1439 after normalization.
    pub end_minutes: i32,
}

impl BookingPair {
    /// Creates a pair from raw in/out times, normalizing cross-midnight spans.
    pub fn new(in_id: String, out_id: String, category: BookingCategory, start: i32, end: i32) -> Self {
        let end_minutes = normalize_out(start, end);
        BookingPair {
            in_id,
            out_id,
            category,
            start_minutes: start,
            end_minutes,
        }
    }

    /// Returns the duration of the interval in minutes (always ≥ 0).
    pub fn duration_minutes(&self) -> i32 {
        interval_minutes(self.start_minutes, self.end_minutes)
    }

    /// Returns true if this pair spans midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.end_minutes >= 1440
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_duration_same_day() {
        let pair = BookingPair::new("a".into(), "b".into(), BookingCategory::Work, 480, 1020);
        assert_eq!(pair.duration_minutes(), 540); // 08:00 - 17:00
        assert!(!pair.crosses_midnight());
    }

    #[test]
    fn test_pair_normalizes_cross_midnight() {
        // 22:00 in, 06:00 out the next day
        let pair = BookingPair::new("a".into(), "b".into(), BookingCategory::Work, 1320, 360);
        assert_eq!(pair.end_minutes, 1800);
        assert_eq!(pair.duration_minutes(), 480);
        assert!(pair.crosses_midnight());
    }

    #[test]
    fn test_zero_duration_pair() {
        let pair = BookingPair::new("a".into(), "b".into(), BookingCategory::Break, 720, 720);
        assert_eq!(pair.duration_minutes(), 0);
    }

    #[test]
    fn test_booking_serialization_round_trip() {
        let booking = Booking {
            id: "b1".to_string(),
            minutes: 495,
            direction: BookingDirection::In,
            category: BookingCategory::Work,
            pair_id: Some("p1".to_string()),
        };

        let json = serde_json::to_string(&booking).unwrap();
        let deserialized: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(booking, deserialized);
    }

    #[test]
    fn test_booking_deserialization_defaults_pair_id() {
        let json = r#"{
            "id": "b1",
            "minutes": 480,
            "direction": "in",
            "category": "work"
        }"#;

        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.pair_id, None);
        assert_eq!(booking.direction, BookingDirection::In);
        assert_eq!(booking.category, BookingCategory::Work);
    }

    #[test]
    fn test_direction_serialization() {
        assert_eq!(
            serde_json::to_string(&BookingDirection::In).unwrap(),
            "\"in\""
        );
        assert_eq!(
            serde_json::to_string(&BookingDirection::Out).unwrap(),
            "\"out\""
        );
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&BookingCategory::Work).unwrap(),
            "\"work\""
        );
        assert_eq!(
            serde_json::to_string(&BookingCategory::Break).unwrap(),
            "\"break\""
        );
    }
}
