//! Booking pairing: ordering directional clock events into intervals.
//!
//! The pairer consumes the time-ordered bookings of one category and matches
//! each `in` with the next `out`. Leftovers are never silently dropped: they
//! land in the unpaired sets and become warning/error signals downstream.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Booking, BookingCategory, BookingDirection, BookingPair};

/// The outcome of pairing one category's bookings.
///
/// Deterministic: identical ordered input always yields identical pairs and
/// identical unpaired sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PairingResult {
    /// Matched intervals, ordered by start time.
    pub pairs: Vec<BookingPair>,
    /// Ids of `in` bookings left without an `out`.
    pub unpaired_in: Vec<String>,
    /// Ids of `out` bookings left without an `in`.
    pub unpaired_out: Vec<String>,
    /// Ids of bookings excluded for duplicating an earlier one's
    /// direction and time-of-day.
    pub duplicates: Vec<String>,
}

/// Pairs the bookings of one category into in/out intervals.
///
/// Bookings with a shared pre-assigned `pair_id` (one `in`, one `out`) are
/// matched first; the remainder is matched sequentially in time order. A
/// booking repeating the direction and time of an earlier booking is
/// recorded as a duplicate and excluded from matching.
///
/// Cross-midnight pairs (`out` numerically before `in`) are normalized by
/// [`BookingPair::new`], so every pair's duration is ≥ 0.
pub fn pair_bookings(bookings: &[Booking], category: BookingCategory) -> PairingResult {
    let mut result = PairingResult::default();

    let mut ordered: Vec<&Booking> = bookings.iter().filter(|b| b.category == category).collect();
    ordered.sort_by(|a, b| a.minutes.cmp(&b.minutes));

    // Duplicate exclusion: same direction at the same minute.
    let mut seen: Vec<(BookingDirection, i32)> = Vec::new();
    let mut candidates: Vec<&Booking> = Vec::new();
    for booking in ordered {
        let key = (booking.direction, booking.minutes);
        if seen.contains(&key) {
            result.duplicates.push(booking.id.clone());
        } else {
            seen.push(key);
            candidates.push(booking);
        }
    }

    // Pre-assigned pairs take precedence over sequential matching.
    let mut by_pair_id: HashMap<&str, Vec<&Booking>> = HashMap::new();
    for &booking in &candidates {
        if let Some(pair_id) = &booking.pair_id {
            by_pair_id.entry(pair_id.as_str()).or_default().push(booking);
        }
    }

    let mut preassigned: Vec<&str> = Vec::new();
    for (pair_id, group) in &by_pair_id {
        if group.len() == 2 {
            let in_booking = group.iter().find(|b| b.direction == BookingDirection::In);
            let out_booking = group.iter().find(|b| b.direction == BookingDirection::Out);
            if let (Some(in_b), Some(out_b)) = (in_booking, out_booking) {
                result.pairs.push(BookingPair::new(
                    in_b.id.clone(),
                    out_b.id.clone(),
                    category,
                    in_b.minutes,
                    out_b.minutes,
                ));
                preassigned.push(pair_id);
            }
        }
    }

    // Sequential matching over whatever pair_ids did not consume.
    let mut pending_in: Option<&Booking> = None;
    for booking in candidates {
        if booking
            .pair_id
            .as_deref()
            .is_some_and(|id| preassigned.contains(&id))
        {
            continue;
        }

        match booking.direction {
            BookingDirection::In => {
                if let Some(open) = pending_in.replace(booking) {
                    result.unpaired_in.push(open.id.clone());
                }
            }
            BookingDirection::Out => match pending_in.take() {
                Some(in_b) => {
                    result.pairs.push(BookingPair::new(
                        in_b.id.clone(),
                        booking.id.clone(),
                        category,
                        in_b.minutes,
                        booking.minutes,
                    ));
                }
                None => result.unpaired_out.push(booking.id.clone()),
            },
        }
    }
    if let Some(open) = pending_in {
        result.unpaired_in.push(open.id.clone());
    }

    result
        .pairs
        .sort_by(|a, b| (a.start_minutes, &a.in_id).cmp(&(b.start_minutes, &b.in_id)));
    result
}
