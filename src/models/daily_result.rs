//! Daily calculation result and the closed error/warning code taxonomy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::BookingPair;

/// Hard anomaly codes produced by the daily calculation.
///
/// Errors set `has_error` on the [`DailyResult`] but never abort the
/// calculation: the result is still returned with best-effort values.
/// The enumeration is closed; callers map these codes to user-facing
/// messages and correction tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyErrorCode {
    /// A work day has a departure but no matching arrival booking.
    MissingCome,
    /// A work day has an arrival but no matching departure booking.
    MissingGo,
    /// A break booking could not be paired.
    UnpairedBooking,
    /// Arrival before the plan's arrival window opens.
    EarlyCome,
    /// Arrival after the plan's arrival window closes.
    LateCome,
    /// Departure before the plan's departure window opens.
    EarlyGo,
    /// Departure after the plan's departure window closes.
    LateGo,
    /// First arrival after the core-time window start.
    MissedCoreStart,
    /// Last departure before the core-time window end.
    MissedCoreEnd,
    /// Net work time below the plan's configured minimum.
    BelowMinWorkTime,
    /// The day has no bookings at all.
    NoBookings,
    /// A booking time lies outside 0–1439.
    InvalidTime,
    /// Two bookings of the same direction and category share a time.
    DuplicateInTime,
}

/// Soft anomaly codes produced by the daily calculation.
///
/// Warnings never block computation of the rest of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyWarningCode {
    /// A work interval spans midnight.
    CrossMidnight,
    /// Net time was capped at the plan's configured maximum.
    MaxTimeReached,
    /// The day contains manually booked breaks.
    ManualBreak,
    /// A minimum-break rule triggered but no break was recorded.
    NoBreakRecorded,
    /// A recorded break was shorter than the required minimum.
    ShortBreak,
    /// A break was deducted automatically by rule.
    AutoBreakApplied,
}

/// The complete result of calculating one employee-day.
///
/// Invariant: `has_error == !error_codes.is_empty()`, maintained by
/// [`DailyResult::push_error`].
///
/// # Example
///
/// ```
/// use time_engine::models::DailyResult;
///
/// let result = DailyResult::empty(480);
/// assert_eq!(result.target_minutes, 480);
/// assert!(!result.has_error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DailyResult {
    /// Post-tolerance, post-rounding time per booking id.
    pub calculated_times: HashMap<String, i32>,
    /// Gross work minutes before break deduction.
    pub gross_minutes: i32,
    /// Net work minutes (gross minus unpaid breaks, capped).
    pub net_minutes: i32,
    /// Target minutes from the day plan.
    pub target_minutes: i32,
    /// Minutes worked beyond target.
    pub overtime_minutes: i32,
    /// Minutes short of target.
    pub undertime_minutes: i32,
    /// Unpaid break minutes deducted from gross.
    pub break_minutes: i32,
    /// Paid break minutes (informational, not deducted).
    pub paid_break_minutes: i32,
    /// The calculated first arrival time, if any.
    pub first_come: Option<i32>,
    /// The calculated last departure time, if any.
    pub last_go: Option<i32>,
    /// The matched work and break intervals.
    pub pairs: Vec<BookingPair>,
    /// Ids of `in` bookings without a matching `out`.
    pub unpaired_in: Vec<String>,
    /// Ids of `out` bookings without a matching `in`.
    pub unpaired_out: Vec<String>,
    /// True iff `error_codes` is non-empty.
    pub has_error: bool,
    /// Hard anomaly codes, in detection order.
    pub error_codes: Vec<DailyErrorCode>,
    /// Soft anomaly codes, in detection order.
    pub warning_codes: Vec<DailyWarningCode>,
}

impl DailyResult {
    /// Creates a zeroed result carrying only the plan's target minutes.
    pub fn empty(target_minutes: i32) -> Self {
        DailyResult {
            target_minutes,
            ..Default::default()
        }
    }

    /// Records an error code and keeps the `has_error` invariant.
    ///
    /// Duplicate codes are recorded once.
    pub fn push_error(&mut self, code: DailyErrorCode) {
        if !self.error_codes.contains(&code) {
            self.error_codes.push(code);
        }
        self.has_error = true;
    }

    /// Records a warning code, once per code.
    pub fn push_warning(&mut self, code: DailyWarningCode) {
        if !self.warning_codes.contains(&code) {
            self.warning_codes.push(code);
        }
    }
}
