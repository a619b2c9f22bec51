//! Daily calculation: one employee-day from raw bookings to a result.
//!
//! A single-pass pure function that proceeds through ordered phases:
//! validate, pair, adjust (tolerance then rounding), gross, breaks, net.
//! Any anomaly becomes an error or warning code on the returned
//! [`DailyResult`]; the function never panics and always returns a
//! best-effort, partially-computed result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DayPlanConfig;
use crate::models::{
    Booking, BookingCategory, BookingPair, DailyErrorCode, DailyResult, DailyWarningCode,
};

use super::breaks::calculate_breaks;
use super::pairing::pair_bookings;
use super::rounding::round_time;
use super::time_base::{MINUTES_PER_DAY, is_valid_minute};
use super::tolerance::apply_tolerance;

/// Fully-resolved input for one employee-day calculation.
///
/// The orchestration layer loads bookings and resolves the day plan; the
/// engine receives both by value and performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCalcInput {
    /// The day's clock events, in any order.
    pub bookings: Vec<Booking>,
    /// The day plan governing windows, tolerance, rounding, and breaks.
    pub plan: DayPlanConfig,
}

/// Calculates one employee-day.
///
/// Phases, in order:
///
/// 1. Validate booking times (0–1439); violations become `invalid_time`
///    and the offending booking is excluded.
/// 2. Pair bookings per category; leftovers become `missing_come` /
///    `missing_go` / `unpaired_booking`, duplicates `duplicate_in_time`.
/// 3. Apply tolerance then rounding to work in/out times (first come and
///    last go only, unless the plan rounds all bookings).
/// 4. Compute gross time from the adjusted pairs.
/// 5. Deduct breaks per the plan's rules.
/// 6. Compute net, cap/floor checks, core-time checks, overtime and
///    undertime.
///
/// Invariants on the result: `has_error == !error_codes.is_empty()`,
/// `net == gross − break_minutes`, and
/// `overtime − undertime == net − target`.
pub fn calculate_day(input: &DailyCalcInput) -> DailyResult {
    let plan = &input.plan;
    let mut result = DailyResult::empty(plan.target_minutes);

    if input.bookings.is_empty() {
        result.push_error(DailyErrorCode::NoBookings);
        result.undertime_minutes = plan.target_minutes;
        return result;
    }

    // Phase 1: validate times; invalid bookings drop out of the day.
    let mut valid: Vec<Booking> = Vec::with_capacity(input.bookings.len());
    for booking in &input.bookings {
        if is_valid_minute(booking.minutes) {
            valid.push(booking.clone());
        } else {
            result.push_error(DailyErrorCode::InvalidTime);
        }
    }

    // Phase 2: pair per category.
    let work = pair_bookings(&valid, BookingCategory::Work);
    let breaks = pair_bookings(&valid, BookingCategory::Break);

    if !work.duplicates.is_empty() || !breaks.duplicates.is_empty() {
        result.push_error(DailyErrorCode::DuplicateInTime);
    }
    if !work.unpaired_in.is_empty() {
        result.push_error(DailyErrorCode::MissingGo);
    }
    if !work.unpaired_out.is_empty() {
        result.push_error(DailyErrorCode::MissingCome);
    }
    if !breaks.unpaired_in.is_empty() || !breaks.unpaired_out.is_empty() {
        result.push_error(DailyErrorCode::UnpairedBooking);
    }

    result.unpaired_in = work
        .unpaired_in
        .iter()
        .chain(breaks.unpaired_in.iter())
        .cloned()
        .collect();
    result.unpaired_out = work
        .unpaired_out
        .iter()
        .chain(breaks.unpaired_out.iter())
        .cloned()
        .collect();

    // Phase 3: tolerance then rounding on work in/out times.
    let pair_count = work.pairs.len();
    let mut adjusted_pairs: Vec<BookingPair> = Vec::with_capacity(pair_count);
    for (index, pair) in work.pairs.iter().enumerate() {
        let adjust_in = plan.round_all_bookings || index == 0;
        let adjust_out = plan.round_all_bookings || index + 1 == pair_count;

        let mut start = pair.start_minutes;
        if adjust_in {
            if let Some(tol) = &plan.tolerance {
                start = apply_tolerance(start, plan.come_from, tol.come_plus, tol.come_minus);
            }
            start = round_time(start, plan.rounding_come.as_ref(), plan.come_from);
        }

        let mut end = pair.end_minutes % MINUTES_PER_DAY;
        if adjust_out {
            if let Some(tol) = &plan.tolerance {
                end = apply_tolerance(end, plan.go_to, tol.go_plus, tol.go_minus);
            }
            end = round_time(end, plan.rounding_go.as_ref(), plan.come_from);
        }

        result.calculated_times.insert(pair.in_id.clone(), start);
        result
            .calculated_times
            .insert(pair.out_id.clone(), end.rem_euclid(MINUTES_PER_DAY));

        // Midnight normalization belongs to the raw booking order only.
        // A same-day pair inverted by tolerance/rounding collapses to zero
        // instead of turning into a phantom night shift.
        let end_minutes = if pair.crosses_midnight() {
            end + MINUTES_PER_DAY
        } else {
            end.max(start)
        };
        adjusted_pairs.push(BookingPair {
            in_id: pair.in_id.clone(),
            out_id: pair.out_id.clone(),
            category: BookingCategory::Work,
            start_minutes: start,
            end_minutes,
        });
    }
    for pair in &breaks.pairs {
        result
            .calculated_times
            .insert(pair.in_id.clone(), pair.start_minutes);
        result
            .calculated_times
            .insert(pair.out_id.clone(), pair.end_minutes % MINUTES_PER_DAY);
    }

    result.first_come = adjusted_pairs
        .first()
        .map(|p| p.start_minutes)
        .or_else(|| first_unpaired_in_time(&valid, &work.unpaired_in));
    result.last_go = adjusted_pairs.last().map(|p| p.end_minutes);

    // Window checks on the adjusted first come and last go.
    if let Some(first_come) = result.first_come {
        if first_come < plan.come_from {
            result.push_error(DailyErrorCode::EarlyCome);
        }
        if first_come > plan.come_to {
            result.push_error(DailyErrorCode::LateCome);
        }
    }
    if let Some(last_go) = result.last_go {
        let last_go_tod = last_go.rem_euclid(MINUTES_PER_DAY);
        if last_go < MINUTES_PER_DAY {
            if last_go_tod < plan.go_from {
                result.push_error(DailyErrorCode::EarlyGo);
            }
            if last_go_tod > plan.go_to {
                result.push_error(DailyErrorCode::LateGo);
            }
        }
    }

    // Phase 4: gross time.
    result.gross_minutes = adjusted_pairs.iter().map(|p| p.duration_minutes()).sum();
    if adjusted_pairs.iter().any(|p| p.crosses_midnight()) {
        result.push_warning(DailyWarningCode::CrossMidnight);
    }

    // Phase 5: breaks.
    if !breaks.pairs.is_empty() {
        result.push_warning(DailyWarningCode::ManualBreak);
    }
    let break_result = calculate_breaks(&adjusted_pairs, &breaks.pairs, &plan.break_rules);
    for warning in &break_result.warnings {
        result.push_warning(*warning);
    }
    result.break_minutes = break_result.deducted_minutes;
    result.paid_break_minutes = break_result.paid_minutes;

    // Phase 6: net, caps, core time, overtime/undertime.
    let mut net = (result.gross_minutes - result.break_minutes).max(0);
    if let Some(max_net) = plan.max_net_minutes {
        if net > max_net {
            // Time beyond the daily maximum is not credited at all.
            result.gross_minutes -= net - max_net;
            net = max_net;
            result.push_warning(DailyWarningCode::MaxTimeReached);
        }
    }
    result.net_minutes = net;

    if let Some(min_net) = plan.min_net_minutes {
        if net < min_net {
            result.push_error(DailyErrorCode::BelowMinWorkTime);
        }
    }

    if let (Some(core_start), Some(first_come)) = (plan.core_start, result.first_come) {
        if first_come > core_start {
            result.push_error(DailyErrorCode::MissedCoreStart);
        }
    }
    if let (Some(core_end), Some(last_go)) = (plan.core_end, result.last_go) {
        if last_go < core_end {
            result.push_error(DailyErrorCode::MissedCoreEnd);
        }
    }

    result.overtime_minutes = (net - plan.target_minutes).max(0);
    result.undertime_minutes = (plan.target_minutes - net).max(0);

    result.pairs = adjusted_pairs
        .into_iter()
        .chain(breaks.pairs.into_iter())
        .collect();

    debug!(
        gross = result.gross_minutes,
        net = result.net_minutes,
        errors = result.error_codes.len(),
        warnings = result.warning_codes.len(),
        "daily calculation finished"
    );

    result
}

/// Best-effort first-come when no work pair exists but an arrival does.
fn first_unpaired_in_time(bookings: &[Booking], unpaired_in: &[String]) -> Option<i32> {
    bookings
        .iter()
        .filter(|b| unpaired_in.contains(&b.id))
        .map(|b| b.minutes)
        .min()
}
